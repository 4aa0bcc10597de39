//! Account service configuration

/// Configuration for [`super::AccountService`](super::service::AccountService)
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Base URL of the frontend; setup and reset links are built against it
    pub frontend_url: String,

    /// Lifetime of a forgot-password reset token in seconds
    pub reset_token_expiry_seconds: i64,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            frontend_url: String::from("http://localhost:5173"),
            reset_token_expiry_seconds: 600, // 10 minutes
        }
    }
}

impl AccountServiceConfig {
    /// Create a configuration with an explicit frontend URL
    pub fn new(frontend_url: impl Into<String>) -> Self {
        Self {
            frontend_url: frontend_url.into(),
            ..Default::default()
        }
    }

    /// Set the reset token lifetime in seconds
    pub fn with_reset_token_expiry(mut self, seconds: i64) -> Self {
        self.reset_token_expiry_seconds = seconds;
        self
    }
}
