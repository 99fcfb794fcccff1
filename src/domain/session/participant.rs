//! Participant value object - who is taking the quiz.
//!
//! Collected once before the first question and held for personalizing
//! feedback and result messages. Not part of graph traversal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for a participant name.
pub const MAX_NAME_LENGTH: usize = 80;

/// Year value used by parents and guardians filling in the quiz for someone else.
pub const PARENT_YEAR: &str = "parent";

/// The person answering the questionnaire.
///
/// # Invariants
///
/// - `name` is trimmed, non-empty and at most `MAX_NAME_LENGTH` characters
/// - `year` is trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    year: String,
}

impl Participant {
    /// Creates a participant from raw form input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or year is blank after trimming
    /// - `OutOfRange` if the name is longer than `MAX_NAME_LENGTH`
    pub fn new(name: impl AsRef<str>, year: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LENGTH as i32,
                i32::try_from(len).unwrap_or(i32::MAX),
            ));
        }

        let year = year.as_ref().trim();
        if year.is_empty() {
            return Err(ValidationError::empty_field("year"));
        }

        Ok(Self {
            name: name.to_string(),
            year: year.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns true when a parent or guardian is answering.
    pub fn is_parent(&self) -> bool {
        self.year.eq_ignore_ascii_case(PARENT_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_input() {
        let p = Participant::new("  Sam ", " 11 ").unwrap();
        assert_eq!(p.name(), "Sam");
        assert_eq!(p.year(), "11");
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Participant::new("   ", "12").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn new_rejects_blank_year() {
        let err = Participant::new("Sam", "").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("year"));
    }

    #[test]
    fn new_rejects_overlong_name() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            Participant::new(long, "12"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parent_year_is_case_insensitive() {
        assert!(Participant::new("Alex", "Parent").unwrap().is_parent());
        assert!(!Participant::new("Alex", "10").unwrap().is_parent());
    }
}
