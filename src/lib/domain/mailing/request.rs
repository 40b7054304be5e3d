//! Send-email request model

use crate::domain::{
    mailing::value_objects::{email_address::EmailAddress, subject::Subject},
    validation::ValidationError,
};

/// A validated request to send an email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRequest {
    subject: Subject,
    email: EmailAddress,
}

impl EmailRequest {
    /// Create a new request from already-validated parts
    pub fn new(subject: Subject, email: EmailAddress) -> Self {
        Self { subject, email }
    }

    /// Validate raw subject and email together
    ///
    /// Both fields are checked even when the first one fails, so the error
    /// carries every violated rule across the whole payload.
    pub fn parse(subject: &str, email: &str) -> Result<Self, ValidationError> {
        match (Subject::new(subject), EmailAddress::new(email)) {
            (Ok(subject), Ok(email)) => Ok(Self { subject, email }),
            (subject, email) => {
                let mut violations = Vec::new();

                if let Err(error) = subject {
                    violations.extend(error.violations().to_vec());
                }

                if let Err(error) = email {
                    violations.extend(error.violations().to_vec());
                }

                Err(ValidationError::new(violations))
            }
        }
    }

    /// The subject of the email
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The recipient of the email
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parse_valid_request() -> TestResult {
        let request = EmailRequest::parse("Weekly Update", "user@example.com")?;

        assert_eq!(request.subject().as_str(), "Weekly Update");
        assert_eq!(request.email().as_str(), "user@example.com");

        Ok(())
    }

    #[test]
    fn test_parse_collects_violations_from_both_fields() {
        let error = EmailRequest::parse("", "not-an-email").unwrap_err();
        let message = error.to_string();

        assert!(message.contains("subject is required"));
        assert!(message.contains("email must be a valid email address"));
    }

    #[test]
    fn test_parse_reports_single_field_failure() {
        let error = EmailRequest::parse("Weekly Update", "user@tempmail.com").unwrap_err();

        assert_eq!(
            error.to_string(),
            "email must not use a disposable email provider"
        );
    }
}
