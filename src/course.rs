use crate::activity::{
    Activity, ActivityBase, ActivityKind, LONG_DISPLAY_LEN, SHORT_DISPLAY_LEN,
};
use crate::validation::{ARRANGED, DayAlphabet, Field, InvalidField, ValidationResult};
use std::fmt;

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const MIN_LETTER_COUNT: usize = 1;
const MAX_LETTER_COUNT: usize = 4;
const DIGIT_COUNT: usize = 3;
const SECTION_LENGTH: usize = 3;
const MIN_CREDITS: i32 = 1;
const MAX_CREDITS: i32 = 5;

/// A catalog course. Equality and hashing cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    base: ActivityBase,
    name: String,
    section: String,
    credits: i32,
    instructor_id: String,
}

impl Course {
    /// Validates name, then title and meeting pattern, then section, credits and
    /// instructor id. The first failing field is reported.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> ValidationResult<Self> {
        Self::build(
            name.into(),
            title,
            section.into(),
            credits,
            instructor_id.into(),
            meeting_days,
            (start_time, end_time),
            false,
        )
    }

    /// Course with no fixed meeting time; `meeting_days` must be [`ARRANGED`].
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::build(
            name.into(),
            title,
            section.into(),
            credits,
            instructor_id.into(),
            meeting_days,
            (0, 0),
            true,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        name: String,
        title: impl Into<String>,
        section: String,
        credits: i32,
        instructor_id: String,
        meeting_days: impl Into<String>,
        (start_time, end_time): (i32, i32),
        arranged_only: bool,
    ) -> ValidationResult<Self> {
        validate_name(&name)?;
        let base = ActivityBase::new(
            title,
            meeting_days,
            start_time,
            end_time,
            DayAlphabet::Weekdays,
        )?;
        if arranged_only && base.meeting_days() != ARRANGED {
            return Err(InvalidField::new(Field::MeetingDaysAndTime));
        }
        validate_section(&section)?;
        validate_credits(credits)?;
        validate_instructor_id(&instructor_id)?;

        Ok(Self {
            base,
            name,
            section,
            credits,
            instructor_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult<()> {
        self.base.set_title(title)
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> ValidationResult<()> {
        let section = section.into();
        validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> ValidationResult<()> {
        validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    pub fn set_instructor_id(&mut self, instructor_id: impl Into<String>) -> ValidationResult<()> {
        let instructor_id = instructor_id.into();
        validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }

    /// Weekday letters M, T, W, H, F each at most once, or "A" with both times zero.
    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> ValidationResult<()> {
        self.base
            .set_meeting_days_and_time(meeting_days, start_time, end_time, DayAlphabet::Weekdays)
    }

    pub fn is_arranged(&self) -> bool {
        self.base.meeting_days() == ARRANGED
    }

    /// Canonical record; arranged courses omit the two time fields.
    pub fn record_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.base.title().to_string(),
            self.section.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.base.meeting_days().to_string(),
        ];
        if !self.is_arranged() {
            fields.push(self.base.start_time().to_string());
            fields.push(self.base.end_time().to_string());
        }
        fields
    }
}

impl Activity for Course {
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
        ActivityKind::Course
    }

    fn identity(&self) -> &str {
        &self.name
    }

    fn short_display(&self) -> [String; SHORT_DISPLAY_LEN] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    fn long_display(&self) -> [String; LONG_DISPLAY_LEN] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record_fields().join(","))
    }
}

/// 1-4 letters, one space, exactly 3 digits.
fn validate_name(name: &str) -> ValidationResult<()> {
    let invalid = InvalidField::new(Field::Name);
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(invalid);
    }

    let (prefix, number) = name.split_once(' ').ok_or(invalid)?;
    let letters = prefix.chars().count();
    if !(MIN_LETTER_COUNT..=MAX_LETTER_COUNT).contains(&letters)
        || !prefix.chars().all(char::is_alphabetic)
    {
        return Err(invalid);
    }
    if number.chars().count() != DIGIT_COUNT || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid);
    }
    Ok(())
}

fn validate_section(section: &str) -> ValidationResult<()> {
    if section.len() != SECTION_LENGTH || !section.chars().all(|c| c.is_ascii_digit()) {
        return Err(InvalidField::new(Field::Section));
    }
    Ok(())
}

fn validate_credits(credits: i32) -> ValidationResult<()> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(InvalidField::new(Field::Credits));
    }
    Ok(())
}

fn validate_instructor_id(instructor_id: &str) -> ValidationResult<()> {
    if instructor_id.is_empty() {
        return Err(InvalidField::new(Field::InstructorId));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_grammar() {
        for valid in ["E 115", "CSC 216", "MA 141", "HESF 101"] {
            assert!(validate_name(valid).is_ok(), "{valid}");
        }
        for invalid in [
            "CSC",
            "CSC216",
            "1csc216",
            "ABCDE123",
            "CSC2164",
            "CSC 2164",
            "CSC 21",
            "CSC 492A",
            "ABCDE 123",
            "C5C 216",
            " 216",
            "CSC  216",
        ] {
            assert_eq!(
                validate_name(invalid).unwrap_err().field(),
                Field::Name,
                "{invalid}"
            );
        }
    }

    #[test]
    fn section_must_be_three_digits() {
        assert!(validate_section("001").is_ok());
        assert!(validate_section("01").is_err());
        assert!(validate_section("0001").is_err());
        assert!(validate_section("0a1").is_err());
    }
}
