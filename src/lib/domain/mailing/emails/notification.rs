//! Notification email template

use anyhow::Result;
use askama::Template;

use crate::domain::mailing::content::PreparedEmailContent;

/// Notification email template
#[derive(Debug, Template)]
#[template(path = "emails/notification.html")]
pub struct NotificationTemplate {
    /// The prepared content blocks composed into the document
    pub content: PreparedEmailContent,
}

impl NotificationTemplate {
    /// Creates a new `NotificationTemplate`
    pub fn new(content: PreparedEmailContent) -> Self {
        Self { content }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> Result<String> {
        Ok(format!(
            "{hero}\n\n{main}\n\n{footer}",
            hero = self.content.hero_section,
            main = self.content.main_section,
            footer = self.content.footer_content,
        ))
    }
}
