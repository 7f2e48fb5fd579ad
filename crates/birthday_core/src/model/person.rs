//! BirthdayPerson domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the repository.
//! - Provide the validation rules enforced at input time.
//!
//! # Invariants
//! - `id` is assigned by storage on creation and never reused.
//! - `name` is non-empty after trimming.
//! - `birth_date` is on or before "today" at the time it is set. This is
//!   enforced by the input layer, not by storage constraints.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned surrogate key for a birthday record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = i64;

/// Validation failures for birthday record input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name is empty or whitespace-only after trimming.
    EmptyName,
    /// Birth date lies strictly after the reference date.
    BirthDateInFuture {
        birth_date: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::BirthDateInFuture { birth_date, today } => write!(
                f,
                "birth date {birth_date} lies in the future (today is {today})"
            ),
        }
    }
}

impl Error for PersonValidationError {}

/// A single birthday record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayPerson {
    /// Stable storage-assigned ID, immutable once created.
    pub id: PersonId,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Full birth date. The year is used for age display only; recurrence
    /// matching uses month and day.
    pub birth_date: NaiveDate,
}

impl BirthdayPerson {
    pub fn new(id: PersonId, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
        }
    }

    /// Age this person turns in the given calendar year.
    ///
    /// Not adjusted for whether the birthday has already occurred; callers
    /// use this for "turning N this year" display on the day itself.
    pub fn age_turning_in(&self, year: i32) -> i32 {
        year - self.birth_date.year()
    }
}

/// Validates and trims a name.
///
/// Returns the trimmed name on success so callers persist the canonical
/// form, never the raw input.
pub fn validate_name(name: &str) -> Result<&str, PersonValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PersonValidationError::EmptyName);
    }
    Ok(trimmed)
}

/// Rejects birth dates strictly after the reference date.
pub fn validate_birth_date(
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), PersonValidationError> {
    if birth_date > today {
        return Err(PersonValidationError::BirthDateInFuture { birth_date, today });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_birth_date, validate_name, BirthdayPerson, PersonValidationError};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn validate_name_trims_and_accepts() {
        assert_eq!(validate_name("  Alice "), Ok("Alice"));
    }

    #[test]
    fn validate_name_rejects_whitespace_only() {
        assert_eq!(validate_name("   "), Err(PersonValidationError::EmptyName));
        assert_eq!(validate_name(""), Err(PersonValidationError::EmptyName));
    }

    #[test]
    fn validate_birth_date_accepts_today_and_past() {
        let today = date(2024, 3, 10);
        assert!(validate_birth_date(today, today).is_ok());
        assert!(validate_birth_date(date(1990, 3, 10), today).is_ok());
    }

    #[test]
    fn validate_birth_date_rejects_future() {
        let today = date(2024, 3, 10);
        let err = validate_birth_date(date(2024, 3, 11), today).unwrap_err();
        assert!(matches!(
            err,
            PersonValidationError::BirthDateInFuture { .. }
        ));
    }

    #[test]
    fn age_turning_uses_calendar_year_difference() {
        let person = BirthdayPerson::new(1, "Alice", date(1990, 3, 10));
        assert_eq!(person.age_turning_in(2024), 34);
    }
}
