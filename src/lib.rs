pub mod activity;
pub mod config;
pub mod course;
pub mod event;
pub mod persistence;
pub mod scheduler;
pub mod validation;

pub use activity::{Activity, ActivityKind, ScheduledActivity};
pub use config::SchedulerConfig;
pub use course::Course;
pub use event::Event;
pub use persistence::{
    ActivityWriter, CatalogLoader, CsvRecordIo, PersistenceError, read_course_records,
    write_activity_records,
};
pub use scheduler::{AddOutcome, DEFAULT_SCHEDULE_TITLE, ScheduleError, ScheduleManager};
pub use validation::{ARRANGED, Field, InvalidField};
