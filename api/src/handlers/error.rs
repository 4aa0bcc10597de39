//! Translation of domain errors into HTTP responses.
//!
//! Bodies are flat `{"success": false, "message": "..."}`. Client mistakes
//! carry the domain message; infrastructure failures are logged server-side
//! and answered with a generic message.

use actix_web::HttpResponse;
use tracing::error;

use sd_core::errors::{CredentialError, DomainError, TokenError};
use sd_shared::types::response::ApiResponse;

/// Map a domain error to its HTTP response
pub fn error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { message } => bad_request(message),
        DomainError::Conflict { message } => bad_request(message),

        DomainError::Credential(credential) => match credential {
            CredentialError::WeakPassword { message } => bad_request(message),
            CredentialError::InvalidOrExpiredToken => bad_request("Invalid or expired token."),
            CredentialError::HashingFailed => internal_error(err),
        },

        DomainError::Unauthorized => unauthorized("Authentication required."),
        DomainError::Token(token) => match token {
            TokenError::TokenExpired => unauthorized("Token expired."),
            TokenError::InvalidToken => unauthorized("Invalid token."),
            TokenError::TokenGenerationFailed => internal_error(err),
        },

        DomainError::Forbidden { message } => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(message))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("{} not found.", capitalize(resource)))),

        DomainError::Upstream { .. } | DomainError::Database { .. } | DomainError::Internal { .. } => {
            internal_error(err)
        }
    }
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}

fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::<()>::error(message))
}

fn internal_error(err: &DomainError) -> HttpResponse {
    error!("request failed: {}", err);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal server error."))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
