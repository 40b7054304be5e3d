//! Error types for the mailing module

use lettre::{address::AddressError, error::Error};
use thiserror::Error;

/// Transport errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The SMTP connection could not be established within the retry budget
    #[error("could not connect to the mail server at {host} after {attempts} attempts")]
    TransportUnavailable {
        /// The SMTP host that was unreachable
        host: String,

        /// The number of connection attempts made
        attempts: u32,
    },

    /// The remote server rejected the message
    #[error("{0}")]
    Rejected(String),

    /// Invalid email address
    #[error("invalid email address")]
    InvalidEmail,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<Error> for MailerError {
    fn from(err: Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}

/// Errors raised while fulfilling a send-email request
///
/// Tagged so tests and the HTTP layer can tell transport faults apart from
/// everything else, even though both collapse to the same error envelope.
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// The transport failed to deliver the message
    #[error(transparent)]
    Transport(#[from] MailerError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_is_surfaced_verbatim() {
        let error = MailerError::Rejected("connection refused".to_string());

        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_transport_error_keeps_underlying_message() {
        let error = SendEmailError::from(MailerError::TransportUnavailable {
            host: "smtp.example.com".to_string(),
            attempts: 3,
        });

        assert_eq!(
            error.to_string(),
            "could not connect to the mail server at smtp.example.com after 3 attempts"
        );
        assert!(matches!(error, SendEmailError::Transport(_)));
    }
}
