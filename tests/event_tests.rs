use chrono::Weekday;
use wolf_scheduler::{Activity, ActivityKind, Event, Field};

fn club_meeting() -> Event {
    Event::new("Club Meeting", "M", 1800, 1900, "Weekly sync").unwrap()
}

#[test]
fn event_echoes_fields() {
    let event = club_meeting();
    assert_eq!(event.title(), "Club Meeting");
    assert_eq!(event.meeting_days(), "M");
    assert_eq!(event.start_time(), 1800);
    assert_eq!(event.end_time(), 1900);
    assert_eq!(event.event_details(), "Weekly sync");
    assert_eq!(event.kind(), ActivityKind::Event);
    assert_eq!(event.meeting_string(), "M 6:00PM-7:00PM");
}

#[test]
fn weekend_days_are_allowed() {
    let event = Event::new("Hike", "SU", 800, 1200, "").unwrap();
    assert_eq!(event.meeting_weekdays(), vec![Weekday::Sat, Weekday::Sun]);
    assert_eq!(event.meeting_string(), "SU 8:00AM-12:00PM");
    assert_eq!(event.event_details(), "");
}

#[test]
fn repeated_day_letter_is_rejected() {
    let err = Event::new("Club Meeting", "MM", 1800, 1900, "").unwrap_err();
    assert_eq!(err.field(), Field::MeetingDaysAndTime);
}

#[test]
fn arranged_is_not_an_event_day() {
    let err = Event::new("Club Meeting", "A", 0, 0, "").unwrap_err();
    assert_eq!(err.field(), Field::MeetingDaysAndTime);
}

#[test]
fn invalid_title_and_times_are_rejected() {
    assert_eq!(
        Event::new("", "M", 1800, 1900, "").unwrap_err().field(),
        Field::Title
    );
    assert_eq!(
        Event::new("Club", "", 1800, 1900, "").unwrap_err().field(),
        Field::MeetingDaysAndTime
    );
    assert_eq!(
        Event::new("Club", "M", 1900, 1800, "").unwrap_err().field(),
        Field::MeetingDaysAndTime
    );
    assert_eq!(
        Event::new("Club", "M", 1800, 1875, "").unwrap_err().field(),
        Field::MeetingDaysAndTime
    );
}

#[test]
fn failed_updates_leave_event_unchanged() {
    let mut event = club_meeting();
    let before = event.clone();
    assert!(event.set_title("").is_err());
    assert!(event.set_meeting_days_and_time("MXW", 1000, 1100).is_err());
    assert!(event.set_meeting_days_and_time("SS", 1000, 1100).is_err());
    assert_eq!(event, before);

    event.set_meeting_days_and_time("FSU", 1000, 1100).unwrap();
    event.set_event_details("");
    assert_eq!(event.meeting_days(), "FSU");
    assert_eq!(event.event_details(), "");
}

#[test]
fn display_arrays_leave_course_columns_blank() {
    let event = club_meeting();
    assert_eq!(
        event.short_display(),
        ["", "", "Club Meeting", "M 6:00PM-7:00PM"]
    );
    assert_eq!(
        event.long_display(),
        ["", "", "Club Meeting", "", "", "M 6:00PM-7:00PM", "Weekly sync"]
    );
}

#[test]
fn canonical_record() {
    assert_eq!(club_meeting().to_string(), "Club Meeting,M,1800,1900,Weekly sync");
}

#[test]
fn duplicates_compare_titles_only() {
    let event = club_meeting();
    let same_title = Event::new("Club Meeting", "TH", 900, 1000, "Moved").unwrap();
    let other = Event::new("Lunch", "M", 1800, 1900, "Weekly sync").unwrap();
    assert!(event.is_duplicate(&same_title));
    assert!(!event.is_duplicate(&other));
}
