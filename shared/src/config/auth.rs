//! Authentication and token configuration

use serde::{Deserialize, Serialize};

/// Fallback signing secret used when `JWT_SECRET` is absent
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Setup token expiry in seconds (link sent in the welcome email)
    pub setup_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            setup_token_expiry: 2 * 86400, // 2 days
            issuer: String::from("staffdesk"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set setup token expiry in days
    pub fn with_setup_expiry_days(mut self, days: i64) -> Self {
        self.setup_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Reset token lifetime in seconds (forgot-password window)
    #[serde(default = "default_reset_token_expiry")]
    pub reset_token_expiry: i64,

    /// Base URL of the frontend, used for links embedded in emails
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            reset_token_expiry: default_reset_token_expiry(),
            frontend_url: default_frontend_url(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let setup_token_expiry = std::env::var("SETUP_TOKEN_EXPIRY")
            .unwrap_or_else(|_| (2 * 86400).to_string())
            .parse()
            .unwrap_or(2 * 86400);
        let reset_token_expiry = std::env::var("RESET_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .unwrap_or(600);
        let frontend_url = std::env::var("FRONTEND_URL").unwrap_or_else(|_| default_frontend_url());

        Self {
            jwt: JwtConfig {
                secret,
                setup_token_expiry,
                issuer: String::from("staffdesk"),
            },
            reset_token_expiry,
            frontend_url,
        }
    }
}

fn default_reset_token_expiry() -> i64 {
    600 // 10 minutes
}

fn default_frontend_url() -> String {
    String::from("http://localhost:5173")
}
