use chrono::Weekday;
use std::collections::HashSet;
use std::fmt;

/// Meeting days value meaning "no fixed meeting time".
pub const ARRANGED: &str = "A";

const UPPER_HOUR: i32 = 24;
const UPPER_MINUTE: i32 = 60;

/// The field a constructor or setter rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    MeetingDaysAndTime,
    Name,
    Section,
    Credits,
    InstructorId,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::MeetingDaysAndTime => "meeting days and times",
            Field::Name => "course name",
            Field::Section => "section",
            Field::Credits => "credits",
            Field::InstructorId => "instructor id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidField {
    field: Field,
}

impl InvalidField {
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    pub fn field(&self) -> Field {
        self.field
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}.", self.field.as_str())
    }
}

impl std::error::Error for InvalidField {}

pub type ValidationResult<T> = Result<T, InvalidField>;

/// Day letters an activity may meet on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAlphabet {
    /// M, T, W, H, F plus the arranged sentinel.
    Weekdays,
    /// M, T, W, H, F, S, U.
    FullWeek,
}

impl DayAlphabet {
    fn allows(self, day: Weekday) -> bool {
        match self {
            DayAlphabet::Weekdays => !matches!(day, Weekday::Sat | Weekday::Sun),
            DayAlphabet::FullWeek => true,
        }
    }

    fn allows_arranged(self) -> bool {
        matches!(self, DayAlphabet::Weekdays)
    }
}

/// Maps a meeting day letter to its weekday. H is Thursday, U is Sunday.
pub fn weekday_for_letter(letter: char) -> Option<Weekday> {
    match letter {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'H' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        'S' => Some(Weekday::Sat),
        'U' => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() {
        return Err(InvalidField::new(Field::Title));
    }
    Ok(())
}

/// Checks days against `alphabet` first, then the shared time rules.
pub fn validate_meeting(
    meeting_days: &str,
    start_time: i32,
    end_time: i32,
    alphabet: DayAlphabet,
) -> ValidationResult<()> {
    let invalid = InvalidField::new(Field::MeetingDaysAndTime);
    if meeting_days.is_empty() {
        return Err(invalid);
    }

    if alphabet.allows_arranged() && meeting_days == ARRANGED {
        if start_time != 0 || end_time != 0 {
            return Err(invalid);
        }
    } else {
        let mut seen = HashSet::with_capacity(meeting_days.len());
        for letter in meeting_days.chars() {
            let day = weekday_for_letter(letter)
                .filter(|day| alphabet.allows(*day))
                .ok_or(invalid)?;
            if !seen.insert(day) {
                return Err(invalid);
            }
        }
    }

    if !is_valid_time(start_time) || !is_valid_time(end_time) {
        return Err(invalid);
    }
    if end_time < start_time {
        return Err(invalid);
    }
    Ok(())
}

fn is_valid_time(time: i32) -> bool {
    let hour = time / 100;
    let minute = time % 100;
    (0..UPPER_HOUR).contains(&hour) && (0..UPPER_MINUTE).contains(&minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_times_are_accepted() {
        assert!(validate_meeting("M", 0, 2359, DayAlphabet::FullWeek).is_ok());
        assert!(validate_meeting("M", 1200, 1200, DayAlphabet::FullWeek).is_ok());
    }

    #[test]
    fn out_of_range_hours_and_minutes_are_rejected() {
        for (start, end) in [(2400, 2400), (1060, 1100), (-1, 100), (1000, 960), (-100, 0)] {
            let err = validate_meeting("M", start, end, DayAlphabet::FullWeek).unwrap_err();
            assert_eq!(err.field(), Field::MeetingDaysAndTime, "{start}-{end}");
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert!(validate_meeting("MW", 1445, 1330, DayAlphabet::Weekdays).is_err());
    }

    #[test]
    fn arranged_only_applies_to_weekday_alphabet() {
        assert!(validate_meeting(ARRANGED, 0, 0, DayAlphabet::Weekdays).is_ok());
        assert!(validate_meeting(ARRANGED, 0, 0, DayAlphabet::FullWeek).is_err());
        assert!(validate_meeting(ARRANGED, 800, 900, DayAlphabet::Weekdays).is_err());
        assert!(validate_meeting("AM", 0, 0, DayAlphabet::Weekdays).is_err());
    }

    #[test]
    fn empty_days_are_rejected() {
        assert!(validate_meeting("", 900, 1000, DayAlphabet::FullWeek).is_err());
        assert!(validate_meeting("", 0, 0, DayAlphabet::Weekdays).is_err());
    }

    #[test]
    fn weekend_letters_need_full_week() {
        assert!(validate_meeting("SU", 900, 1000, DayAlphabet::Weekdays).is_err());
        assert!(validate_meeting("SU", 900, 1000, DayAlphabet::FullWeek).is_ok());
    }

    #[test]
    fn repeated_and_unknown_letters_are_rejected() {
        assert!(validate_meeting("MTM", 900, 1000, DayAlphabet::Weekdays).is_err());
        assert!(validate_meeting("MX", 900, 1000, DayAlphabet::FullWeek).is_err());
        assert!(validate_meeting("m", 900, 1000, DayAlphabet::FullWeek).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(InvalidField::new(Field::Title).to_string(), "Invalid title.");
        assert_eq!(
            InvalidField::new(Field::MeetingDaysAndTime).to_string(),
            "Invalid meeting days and times."
        );
        assert_eq!(InvalidField::new(Field::Name).to_string(), "Invalid course name.");
    }
}
