//! Domain-specific error types and error handling.
//!
//! The taxonomy mirrors the outward HTTP mapping: validation and conflicts
//! become 400s, missing auth 401, forbidden deletes 403, missing resources
//! 404, and upstream/internal failures 500. The presentation layer owns the
//! final status codes and message strings.

use thiserror::Error;

/// Credential workflow errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Password does not meet the strength policy: {message}")]
    WeakPassword { message: String },

    /// Unknown and expired tokens are deliberately indistinguishable
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Setup token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Upstream {service} failure: {message}")]
    Upstream { service: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Convenience constructor for validation failures
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for missing resources
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_bridges_into_domain_error() {
        let err: DomainError = CredentialError::InvalidOrExpiredToken.into();
        assert!(matches!(
            err,
            DomainError::Credential(CredentialError::InvalidOrExpiredToken)
        ));
    }

    #[test]
    fn test_display_messages() {
        let err = DomainError::not_found("account");
        assert_eq!(err.to_string(), "Resource not found: account");

        let err = DomainError::validation("Email is required.");
        assert_eq!(err.to_string(), "Validation error: Email is required.");
    }
}
