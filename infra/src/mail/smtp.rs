//! SMTP implementation of the Mailer trait using lettre.
//!
//! Messages with an HTML body are sent as multipart/alternative so text-only
//! clients still get a readable copy.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use sd_core::errors::DomainError;
use sd_core::services::mail::{MailMessage, Mailer};
use sd_shared::config::mail::MailConfig;
use sd_shared::utils::mask_email;

use crate::InfrastructureError;

/// SMTP mail sender backed by lettre's async transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "SMTP credentials are not configured".to_string(),
            ));
        }

        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("SMTP relay setup failed: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        info!(host = %config.smtp_host, port = config.smtp_port, "SMTP mailer initialized");
        Ok(Self { transport, from })
    }

    fn build_message(&self, message: &MailMessage) -> Result<Message, InfrastructureError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient address: {}", e)))?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone());

        let built = match &message.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                html.clone(),
            )),
            None => builder.singlepart(SinglePart::plain(message.text.clone())),
        };

        built.map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: MailMessage) -> Result<(), DomainError> {
        let email = self.build_message(&message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| InfrastructureError::Mail(format!("SMTP send failed: {}", e)))?;

        debug!(
            to = %mask_email(&message.to),
            subject = %message.subject,
            "email sent"
        );
        Ok(())
    }
}
