//! Mailer abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[cfg(test)]
use mockall::mock;

use crate::domain::mailing::{errors::MailerError, value_objects::email_address::EmailAddress};

/// Acknowledgment returned by the mail server for a delivered message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SendReceipt {
    /// The SMTP reply code
    #[schema(example = "250")]
    pub code: String,

    /// The SMTP reply message
    #[schema(example = "OK: queued")]
    pub message: String,
}

/// Email transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `to` - The [`EmailAddress`] to send the email to.
    /// * `subject` - The subject of the email.
    /// * `html` - The HTML version of the email.
    /// * `plain` - The plain text version of the email.
    ///
    /// # Returns
    /// A [`SendReceipt`] acknowledging delivery, or a [`MailerError`] when the
    /// connection could not be established or the server rejected the message.
    async fn send_email(
        &self,
        to: &EmailAddress,
        subject: &str,
        html: &str,
        plain: &str,
    ) -> Result<SendReceipt, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(
            &self,
            to: &EmailAddress,
            subject: &str,
            html: &str,
            plain: &str,
        ) -> Result<SendReceipt, MailerError>;
    }
}
