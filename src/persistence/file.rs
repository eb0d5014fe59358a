use super::{ActivityWriter, CatalogLoader, PersistenceError, PersistenceResult};
use crate::validation::ARRANGED;
use crate::{Course, ScheduledActivity};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

const ARRANGED_FIELD_COUNT: usize = 6;
const TIMED_FIELD_COUNT: usize = 8;

/// Reads catalogs and writes schedules as headerless comma-separated records.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordIo;

impl CatalogLoader for CsvRecordIo {
    fn load_catalog(&self, path: &Path) -> PersistenceResult<Vec<Course>> {
        read_course_records(path)
    }
}

impl ActivityWriter for CsvRecordIo {
    fn write_activities(
        &self,
        path: &Path,
        activities: &[ScheduledActivity],
    ) -> PersistenceResult<()> {
        write_activity_records(path, activities)
    }
}

#[derive(Deserialize)]
struct CourseCsvRecord {
    name: String,
    title: String,
    section: String,
    credits: i32,
    instructor_id: String,
    meeting_days: String,
    #[serde(default)]
    start_time: Option<i32>,
    #[serde(default)]
    end_time: Option<i32>,
}

impl CourseCsvRecord {
    fn into_course(self) -> PersistenceResult<Course> {
        let course = match (self.start_time, self.end_time) {
            (None, None) if self.meeting_days == ARRANGED => Course::arranged(
                self.name,
                self.title,
                self.section,
                self.credits,
                self.instructor_id,
                self.meeting_days,
            ),
            (Some(start_time), Some(end_time)) if self.meeting_days != ARRANGED => Course::new(
                self.name,
                self.title,
                self.section,
                self.credits,
                self.instructor_id,
                self.meeting_days,
                start_time,
                end_time,
            ),
            _ => {
                return Err(PersistenceError::InvalidData(
                    "meeting times do not match meeting days".into(),
                ));
            }
        };
        course.map_err(|err| PersistenceError::InvalidData(err.to_string()))
    }
}

fn parse_course_record(record: &StringRecord) -> PersistenceResult<Course> {
    let expected = if record.get(5) == Some(ARRANGED) {
        ARRANGED_FIELD_COUNT
    } else {
        TIMED_FIELD_COUNT
    };
    if record.len() != expected {
        return Err(PersistenceError::InvalidData(format!(
            "expected {expected} fields, found {}",
            record.len()
        )));
    }
    record
        .deserialize::<CourseCsvRecord>(None)?
        .into_course()
}

/// Loads every valid course in `path`. Malformed lines and repeated
/// name/section pairs are skipped.
pub fn read_course_records<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file);

    let mut courses = Vec::new();
    let mut seen = HashSet::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable catalog line");
                continue;
            }
        };
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        match parse_course_record(&record) {
            Ok(course) => {
                if seen.insert((course.name().to_string(), course.section().to_string())) {
                    courses.push(course);
                } else {
                    warn!(
                        line,
                        name = course.name(),
                        section = course.section(),
                        "skipping duplicate course"
                    );
                }
            }
            Err(err) => warn!(line, error = %err, "skipping invalid course record"),
        }
    }

    info!(path = %path.display(), count = courses.len(), "loaded course catalog");
    Ok(courses)
}

/// Writes one record per activity, in order.
pub fn write_activity_records<P: AsRef<Path>>(
    path: P,
    activities: &[ScheduledActivity],
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(file);
    for activity in activities {
        writer.write_record(activity.record_fields())?;
    }
    writer.flush()?;
    info!(path = %path.display(), count = activities.len(), "exported schedule");
    Ok(())
}
