//! Email content preparation

/// Subject used when the request carries none
pub const DEFAULT_SUBJECT: &str = "You have a new notification";

/// Content blocks for a notification email
///
/// Derived deterministically from the subject; carries no identity beyond the
/// request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedEmailContent {
    /// Document title of the email page
    pub page_title: String,

    /// Hidden preview line shown by mail clients
    pub preheader_text: String,

    /// Headline block
    pub hero_section: String,

    /// Main body block
    pub main_section: String,

    /// Footer block
    pub footer_content: String,
}

impl PreparedEmailContent {
    /// Derive the content blocks from an optional subject
    ///
    /// An absent or blank subject falls back to the default content shape.
    pub fn from_subject(subject: Option<&str>) -> Self {
        let subject = match subject.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => DEFAULT_SUBJECT,
        };

        Self {
            page_title: subject.to_string(),
            preheader_text: format!("{subject} - a message from Mail Courier"),
            hero_section: subject.to_string(),
            main_section: format!("This message was sent to you with the subject {subject}."),
            footer_content: "You are receiving this email because your address was entered \
                             on our send form."
                .to_string(),
        }
    }
}
