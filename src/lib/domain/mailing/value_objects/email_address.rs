//! Email address value object

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::validation::{FieldViolation, StringRules, ValidationError};

/// Minimum accepted length of an email address
pub const EMAIL_MIN: usize = 6;

/// Maximum accepted length of an email address
pub const EMAIL_MAX: usize = 254;

/// Substrings of known disposable email providers
///
/// Matched as literal, case-sensitive substrings over the whole value, not as
/// domain suffixes.
pub const DISPOSABLE_PROVIDERS: [&str; 3] = ["tempmail", "mailinator", "yopmail"];

const EMAIL_RULES: StringRules = StringRules::new("email", EMAIL_MIN, EMAIL_MAX);

lazy_static! {
    /// Requires at least two domain segments after the `@`
    static ref DOMAIN_SEGMENTS_REGEX: Regex =
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap();

    /// General address shape checked in addition to the segment rule
    static ref ADDRESS_SHAPE_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// A validated recipient email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate a raw string into an email address
    ///
    /// Every rule is checked; all failures are returned together rather than
    /// stopping at the first one.
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
        let trimmed = raw.trim();
        let mut violations = EMAIL_RULES.check(raw);

        if trimmed.is_empty() {
            return violations;
        }

        if !DOMAIN_SEGMENTS_REGEX.is_match(trimmed) {
            violations.push(FieldViolation::new(
                "email",
                "email must be a valid email address",
            ));
        }

        if !ADDRESS_SHAPE_REGEX.is_match(trimmed) {
            violations.push(FieldViolation::new(
                "email",
                "email does not match the accepted address shape",
            ));
        }

        if DISPOSABLE_PROVIDERS
            .iter()
            .any(|provider| raw.contains(provider))
        {
            violations.push(FieldViolation::new(
                "email",
                "email must not use a disposable email provider",
            ));
        }

        violations
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
