use crate::course::Course;
use crate::event::Event;
use crate::validation::{self, ARRANGED, DayAlphabet, ValidationResult};
use chrono::{NaiveTime, Weekday};
use std::fmt;

/// Width of [`Activity::short_display`].
pub const SHORT_DISPLAY_LEN: usize = 4;
/// Width of [`Activity::long_display`].
pub const LONG_DISPLAY_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Course,
    Event,
}

/// Title and meeting pattern shared by every activity.
///
/// Only reachable through [`Course`] and [`Event`], which pick the day
/// alphabet passed to the validating methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ActivityBase {
    title: String,
    meeting_days: String,
    start_time: i32,
    end_time: i32,
}

impl ActivityBase {
    pub(crate) fn new(
        title: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
        alphabet: DayAlphabet,
    ) -> ValidationResult<Self> {
        let title = title.into();
        let meeting_days = meeting_days.into();
        validation::validate_title(&title)?;
        validation::validate_meeting(&meeting_days, start_time, end_time, alphabet)?;
        Ok(Self {
            title,
            meeting_days,
            start_time,
            end_time,
        })
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn meeting_days(&self) -> &str {
        &self.meeting_days
    }

    pub(crate) fn start_time(&self) -> i32 {
        self.start_time
    }

    pub(crate) fn end_time(&self) -> i32 {
        self.end_time
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) -> ValidationResult<()> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub(crate) fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
        alphabet: DayAlphabet,
    ) -> ValidationResult<()> {
        let meeting_days = meeting_days.into();
        validation::validate_meeting(&meeting_days, start_time, end_time, alphabet)?;
        self.meeting_days = meeting_days;
        self.start_time = start_time;
        self.end_time = end_time;
        Ok(())
    }
}

/// Anything with a title and a meeting pattern that can sit on a schedule.
pub trait Activity {
    fn title(&self) -> &str;
    fn meeting_days(&self) -> &str;
    fn start_time(&self) -> i32;
    fn end_time(&self) -> i32;
    fn kind(&self) -> ActivityKind;

    /// Field compared by [`Activity::is_duplicate`] among activities of the same kind.
    fn identity(&self) -> &str;

    fn short_display(&self) -> [String; SHORT_DISPLAY_LEN];
    fn long_display(&self) -> [String; LONG_DISPLAY_LEN];

    /// "Arranged", or the days followed by a 12-hour time range such as `MW 1:30PM-2:45PM`.
    fn meeting_string(&self) -> String {
        meeting_string(self.meeting_days(), self.start_time(), self.end_time())
    }

    fn meeting_weekdays(&self) -> Vec<Weekday> {
        self.meeting_days()
            .chars()
            .filter_map(validation::weekday_for_letter)
            .collect()
    }

    /// Activities of different kinds are never duplicates.
    fn is_duplicate(&self, other: &dyn Activity) -> bool {
        self.kind() == other.kind() && self.identity() == other.identity()
    }
}

pub(crate) fn meeting_string(meeting_days: &str, start_time: i32, end_time: i32) -> String {
    if meeting_days == ARRANGED {
        return "Arranged".to_string();
    }
    format!(
        "{} {}-{}",
        meeting_days,
        time_string(start_time),
        time_string(end_time)
    )
}

fn time_string(time: i32) -> String {
    let hour = u32::try_from(time / 100).ok();
    let minute = u32::try_from(time % 100).ok();
    hour.zip(minute)
        .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .map(|t| t.format("%-I:%M%p").to_string())
        .unwrap_or_else(|| time.to_string())
}

/// An entry on a personal schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScheduledActivity {
    Course(Course),
    Event(Event),
}

impl ScheduledActivity {
    fn as_activity(&self) -> &dyn Activity {
        match self {
            ScheduledActivity::Course(course) => course,
            ScheduledActivity::Event(event) => event,
        }
    }

    /// Fields of the canonical comma-separated record, in file order.
    pub fn record_fields(&self) -> Vec<String> {
        match self {
            ScheduledActivity::Course(course) => course.record_fields(),
            ScheduledActivity::Event(event) => event.record_fields(),
        }
    }
}

impl Activity for ScheduledActivity {
    fn title(&self) -> &str {
        self.as_activity().title()
    }

    fn meeting_days(&self) -> &str {
        self.as_activity().meeting_days()
    }

    fn start_time(&self) -> i32 {
        self.as_activity().start_time()
    }

    fn end_time(&self) -> i32 {
        self.as_activity().end_time()
    }

    fn kind(&self) -> ActivityKind {
        self.as_activity().kind()
    }

    fn identity(&self) -> &str {
        self.as_activity().identity()
    }

    fn short_display(&self) -> [String; SHORT_DISPLAY_LEN] {
        self.as_activity().short_display()
    }

    fn long_display(&self) -> [String; LONG_DISPLAY_LEN] {
        self.as_activity().long_display()
    }
}

impl From<Course> for ScheduledActivity {
    fn from(course: Course) -> Self {
        ScheduledActivity::Course(course)
    }
}

impl From<Event> for ScheduledActivity {
    fn from(event: Event) -> Self {
        ScheduledActivity::Event(event)
    }
}

impl fmt::Display for ScheduledActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduledActivity::Course(course) => fmt::Display::fmt(course, f),
            ScheduledActivity::Event(event) => fmt::Display::fmt(event, f),
        }
    }
}
