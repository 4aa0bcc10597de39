//! Mock mailer for development and testing.
//!
//! Logs messages instead of sending them and keeps a count so tests can
//! assert delivery without a relay.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use sd_core::errors::DomainError;
use sd_core::services::mail::{MailMessage, Mailer};
use sd_shared::utils::mask_email;

/// Mock mail sender
#[derive(Clone)]
pub struct MockMailer {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Number of messages sent so far
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: MailMessage) -> Result<(), DomainError> {
        if self.simulate_failure {
            warn!(
                to = %mask_email(&message.to),
                "mock mailer simulating delivery failure"
            );
            return Err(DomainError::Upstream {
                service: "mail".to_string(),
                message: "Simulated mail delivery failure".to_string(),
            });
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            target: "mail",
            provider = "mock",
            to = %mask_email(&message.to),
            subject = %message.subject,
            count,
            "mock email delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_deliveries() {
        let mailer = MockMailer::new();
        mailer
            .send(MailMessage::text("a@example.com", "Hi", "body"))
            .await
            .unwrap();
        mailer
            .send(MailMessage::text("b@example.com", "Hi", "body"))
            .await
            .unwrap();
        assert_eq!(mailer.message_count(), 2);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let mailer = MockMailer::failing();
        let result = mailer
            .send(MailMessage::text("a@example.com", "Hi", "body"))
            .await;
        assert!(matches!(result, Err(DomainError::Upstream { .. })));
        assert_eq!(mailer.message_count(), 0);
    }
}
