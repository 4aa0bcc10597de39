//! # Infrastructure Layer
//!
//! Concrete implementations of the interfaces the core crate defines:
//!
//! - **Database**: MySQL account repository using SQLx
//! - **Mail**: SMTP delivery via lettre, plus a logging mock
//! - **Storage**: Supabase-style object storage REST client, plus a mock

pub mod database;
pub mod mail;
pub mod storage;

use sd_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mail transport error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Object storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            InfrastructureError::Http(e) => DomainError::Upstream {
                service: "http".to_string(),
                message: e.to_string(),
            },
            InfrastructureError::Mail(message) => DomainError::Upstream {
                service: "mail".to_string(),
                message,
            },
            InfrastructureError::Storage(message) => DomainError::Upstream {
                service: "storage".to_string(),
                message,
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
