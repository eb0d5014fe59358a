use crate::activity::{
    Activity, ActivityBase, ActivityKind, LONG_DISPLAY_LEN, SHORT_DISPLAY_LEN,
};
use crate::validation::{DayAlphabet, ValidationResult};
use std::fmt;

/// An ad-hoc schedule entry that may meet on any day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    base: ActivityBase,
    event_details: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
        event_details: impl Into<String>,
    ) -> ValidationResult<Self> {
        let base = ActivityBase::new(
            title,
            meeting_days,
            start_time,
            end_time,
            DayAlphabet::FullWeek,
        )?;
        Ok(Self {
            base,
            event_details: event_details.into(),
        })
    }

    pub fn event_details(&self) -> &str {
        &self.event_details
    }

    /// Details are free text; empty is allowed.
    pub fn set_event_details(&mut self, event_details: impl Into<String>) {
        self.event_details = event_details.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult<()> {
        self.base.set_title(title)
    }

    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> ValidationResult<()> {
        self.base
            .set_meeting_days_and_time(meeting_days, start_time, end_time, DayAlphabet::FullWeek)
    }

    pub fn record_fields(&self) -> Vec<String> {
        vec![
            self.base.title().to_string(),
            self.base.meeting_days().to_string(),
            self.base.start_time().to_string(),
            self.base.end_time().to_string(),
            self.event_details.clone(),
        ]
    }
}

impl Activity for Event {
    fn title(&self) -> &str {
        self.base.title()
    }

    fn meeting_days(&self) -> &str {
        self.base.meeting_days()
    }

    fn start_time(&self) -> i32 {
        self.base.start_time()
    }

    fn end_time(&self) -> i32 {
        self.base.end_time()
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Event
    }

    fn identity(&self) -> &str {
        self.base.title()
    }

    fn short_display(&self) -> [String; SHORT_DISPLAY_LEN] {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    fn long_display(&self) -> [String; LONG_DISPLAY_LEN] {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.event_details.clone(),
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record_fields().join(","))
    }
}
