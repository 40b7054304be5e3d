//! Email subject value object

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::validation::{FieldViolation, StringRules, ValidationError};

/// Minimum accepted length of a subject
pub const SUBJECT_MIN: usize = 3;

/// Maximum accepted length of a subject
pub const SUBJECT_MAX: usize = 120;

const SUBJECT_RULES: StringRules = StringRules::new("subject", SUBJECT_MIN, SUBJECT_MAX);

lazy_static! {
    /// Capitalized-words shape, e.g. "Weekly Update"
    ///
    /// Advisory only; request validation applies the length rules alone.
    static ref CAPITALIZED_WORDS_REGEX: Regex =
        Regex::new(r"^[A-Z][A-Za-z]*( [A-Z][A-Za-z]*)*$").unwrap();
}

/// A validated email subject
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    /// Validate a raw string into a subject
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let violations = Self::violations(raw);

        if violations.is_empty() {
            Ok(Self(raw.trim().to_string()))
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// Collect every rule violated by the raw value
    pub fn violations(raw: &str) -> Vec<FieldViolation> {
        SUBJECT_RULES.check(raw)
    }

    /// Whether the value matches the capitalized-words shape
    pub fn is_capitalized_words(raw: &str) -> bool {
        CAPITALIZED_WORDS_REGEX.is_match(raw.trim())
    }

    /// The subject as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}
