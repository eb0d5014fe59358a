use crate::activity::{Activity, LONG_DISPLAY_LEN, SHORT_DISPLAY_LEN, ScheduledActivity};
use crate::config::SchedulerConfig;
use crate::persistence::{ActivityWriter, CatalogLoader, CsvRecordIo, PersistenceError};
use crate::validation::InvalidField;
use crate::{Course, Event};
use std::fmt;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

#[derive(Debug)]
pub enum ScheduleError {
    InvalidField(InvalidField),
    AlreadyEnrolled { name: String },
    DuplicateEvent { title: String },
    FileAccess(PersistenceError),
    CannotSave(PersistenceError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidField(err) => write!(f, "{err}"),
            ScheduleError::AlreadyEnrolled { name } => {
                write!(f, "You are already enrolled in {name}")
            }
            ScheduleError::DuplicateEvent { title } => {
                write!(f, "You have already created an event called {title}")
            }
            ScheduleError::FileAccess(_) => write!(f, "Cannot find file."),
            ScheduleError::CannotSave(_) => write!(f, "The file cannot be saved."),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::InvalidField(err) => Some(err),
            ScheduleError::FileAccess(err) | ScheduleError::CannotSave(err) => Some(err),
            ScheduleError::AlreadyEnrolled { .. } | ScheduleError::DuplicateEvent { .. } => None,
        }
    }
}

impl From<InvalidField> for ScheduleError {
    fn from(value: InvalidField) -> Self {
        Self::InvalidField(value)
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Outcome of [`ScheduleManager::add_course_to_schedule`] when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    NotInCatalog,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Owns the read-only course catalog and the user's schedule.
#[derive(Debug, Clone)]
pub struct ScheduleManager {
    catalog: Vec<Course>,
    schedule: Vec<ScheduledActivity>,
    title: String,
}

impl ScheduleManager {
    /// Loads the catalog at `path` with the csv record reader.
    pub fn new<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        Self::with_loader(path, &CsvRecordIo)
    }

    pub fn with_loader<P, L>(path: P, loader: &L) -> ScheduleResult<Self>
    where
        P: AsRef<Path>,
        L: CatalogLoader + ?Sized,
    {
        let catalog = loader
            .load_catalog(path.as_ref())
            .map_err(ScheduleError::FileAccess)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn from_catalog(catalog: Vec<Course>) -> Self {
        Self {
            catalog,
            schedule: Vec::new(),
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }

    /// Opens the configured catalog and applies the configured title.
    pub fn from_config(config: &SchedulerConfig) -> ScheduleResult<Self> {
        let path = config.catalog_path.as_deref().ok_or_else(|| {
            ScheduleError::FileAccess(PersistenceError::InvalidData(
                "no catalog path configured".into(),
            ))
        })?;
        let mut manager = Self::new(path)?;
        manager.set_schedule_title(config.schedule_title.clone());
        Ok(manager)
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[ScheduledActivity] {
        &self.schedule
    }

    pub fn course_catalog(&self) -> Vec<[String; SHORT_DISPLAY_LEN]> {
        self.catalog.iter().map(Activity::short_display).collect()
    }

    pub fn scheduled_activities(&self) -> Vec<[String; SHORT_DISPLAY_LEN]> {
        self.schedule.iter().map(Activity::short_display).collect()
    }

    pub fn full_scheduled_activities(&self) -> Vec<[String; LONG_DISPLAY_LEN]> {
        self.schedule.iter().map(Activity::long_display).collect()
    }

    /// First catalog course matching both name and section.
    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    pub fn add_course_to_schedule(&mut self, name: &str, section: &str) -> ScheduleResult<AddOutcome> {
        let Some(course) = self.course_from_catalog(name, section) else {
            debug!(name, section, "course not in catalog");
            return Ok(AddOutcome::NotInCatalog);
        };
        if self.schedule.iter().any(|activity| activity.is_duplicate(course)) {
            return Err(ScheduleError::AlreadyEnrolled {
                name: name.to_string(),
            });
        }
        let course = course.clone();
        self.schedule.push(course.into());
        debug!(name, section, "added course to schedule");
        Ok(AddOutcome::Added)
    }

    /// Returns false when `index` is past the end of the schedule.
    pub fn remove_activity_from_schedule(&mut self, index: usize) -> bool {
        if index >= self.schedule.len() {
            return false;
        }
        let removed = self.schedule.remove(index);
        debug!(index, title = removed.title(), "removed activity from schedule");
        true
    }

    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        event_details: &str,
    ) -> ScheduleResult<()> {
        let event = Event::new(title, meeting_days, start_time, end_time, event_details)?;
        if self.schedule.iter().any(|activity| activity.is_duplicate(&event)) {
            return Err(ScheduleError::DuplicateEvent {
                title: title.to_string(),
            });
        }
        self.schedule.push(event.into());
        debug!(title, "added event to schedule");
        Ok(())
    }

    pub fn reset_schedule(&mut self) {
        self.schedule = Vec::new();
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    /// Any title is accepted, including an empty one.
    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn export_schedule<P: AsRef<Path>>(&self, path: P) -> ScheduleResult<()> {
        self.export_schedule_with(path, &CsvRecordIo)
    }

    pub fn export_schedule_with<P, W>(&self, path: P, writer: &W) -> ScheduleResult<()>
    where
        P: AsRef<Path>,
        W: ActivityWriter + ?Sized,
    {
        writer
            .write_activities(path.as_ref(), &self.schedule)
            .map_err(ScheduleError::CannotSave)
    }
}
