//! Send-email use case

use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::mailing::{
    content::PreparedEmailContent,
    emails::notification::NotificationTemplate,
    errors::SendEmailError,
    mailer::{Mailer, SendReceipt},
    request::EmailRequest,
};

/// Email dispatch service
#[async_trait]
pub trait MailingService: Clone + Send + Sync + 'static {
    /// Prepare, render and dispatch the email described by `request`
    ///
    /// # Arguments
    /// * `request` - The validated [`EmailRequest`] to fulfil.
    ///
    /// # Returns
    /// - [`Ok`] with the transport's [`SendReceipt`] when the message was
    ///   accepted by the mail server.
    /// - [`Err`] with a [`SendEmailError`] tagged by failure category.
    async fn send_email(&self, request: &EmailRequest) -> Result<SendReceipt, SendEmailError>;
}

#[cfg(test)]
mock! {
    pub MailingService {}

    impl Clone for MailingService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailingService for MailingService {
        async fn send_email(&self, request: &EmailRequest) -> Result<SendReceipt, SendEmailError>;
    }
}

/// Email dispatch service implementation
#[derive(Debug, Clone)]
pub struct MailingServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> MailingServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new mailing service
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl<M> MailingService for MailingServiceImpl<M>
where
    M: Mailer,
{
    async fn send_email(&self, request: &EmailRequest) -> Result<SendReceipt, SendEmailError> {
        let content = PreparedEmailContent::from_subject(Some(request.subject().as_str()));
        let template = NotificationTemplate::new(content);

        let html = template
            .render()
            .context("failed to render notification email")?;
        let html =
            css_inline::inline(&html).context("failed to inline notification email styles")?;
        let plain = template.render_plain()?;

        let receipt = self
            .mailer
            .send_email(request.email(), request.subject().as_str(), &html, &plain)
            .await?;

        Ok(receipt)
    }
}
