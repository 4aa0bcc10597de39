//! Mail sender interface.
//!
//! The concrete SMTP transport lives in the infrastructure crate; the domain
//! only composes messages and hands them to this trait.

use async_trait::async_trait;

use crate::errors::DomainError;

/// A composed transactional email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// Optional HTML body; transports fall back to text when absent
    pub html: Option<String>,
}

impl MailMessage {
    /// Create a plain-text message
    pub fn text(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            html: None,
        }
    }

    /// Attach an HTML alternative body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// Transactional email sender
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a message; failures surface as `DomainError::Upstream`
    async fn send(&self, message: MailMessage) -> Result<(), DomainError>;
}
