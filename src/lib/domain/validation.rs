//! Reusable field validation rules

use std::fmt;

/// A single violated rule for a named field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    /// The field the rule applies to
    pub field: &'static str,

    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    /// Create a new field violation
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A request payload that failed validation
///
/// Collects every violated rule rather than stopping at the first one, so the
/// caller sees the complete list of problems in a single response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Create a new validation error from the collected violations
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// The individual violations behind this error
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect();

        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Length rules for a trimmed string field
///
/// Purely descriptive until applied to a value with [`StringRules::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringRules {
    field: &'static str,
    min: usize,
    max: usize,
}

impl StringRules {
    /// Describe a string field with length bounds `[min, max]`
    pub const fn new(field: &'static str, min: usize, max: usize) -> Self {
        Self { field, min, max }
    }

    /// Check a raw value against the rules, collecting every violation
    pub fn check(&self, raw: &str) -> Vec<FieldViolation> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return vec![FieldViolation::new(
                self.field,
                format!("{} is required", self.field),
            )];
        }

        let mut violations = Vec::new();

        if trimmed.chars().count() < self.min {
            violations.push(FieldViolation::new(
                self.field,
                format!(
                    "{} must be at least {} characters long",
                    self.field, self.min
                ),
            ));
        }

        if trimmed.chars().count() > self.max {
            violations.push(FieldViolation::new(
                self.field,
                format!("{} must be at most {} characters long", self.field, self.max),
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: StringRules = StringRules::new("subject", 3, 10);

    #[test]
    fn test_value_within_bounds_passes() {
        assert!(RULES.check("hello").is_empty());
    }

    #[test]
    fn test_value_is_trimmed_before_checking() {
        assert!(RULES.check("  hello  ").is_empty());
    }

    #[test]
    fn test_empty_value_is_required() {
        let violations = RULES.check("   ");

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "subject is required");
    }

    #[test]
    fn test_too_short_value_is_rejected() {
        let violations = RULES.check("hi");

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "subject must be at least 3 characters long"
        );
    }

    #[test]
    fn test_too_long_value_is_rejected() {
        let violations = RULES.check("hello world over the limit");

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "subject must be at most 10 characters long"
        );
    }

    #[test]
    fn test_validation_error_joins_all_messages() {
        let error = ValidationError::new(vec![
            FieldViolation::new("subject", "subject is required"),
            FieldViolation::new("email", "email is required"),
        ]);

        assert_eq!(
            error.to_string(),
            "subject is required, email is required"
        );
        assert_eq!(error.violations().len(), 2);
    }
}
