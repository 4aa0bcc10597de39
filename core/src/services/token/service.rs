//! Setup token service.
//!
//! Registration emails embed a short-lived HS256 token bound to the new
//! account id; the frontend exchanges it on the new-password page.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, TokenError};

/// Claims carried by a setup token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupTokenClaims {
    /// Account id the token is bound to
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Issues and verifies signed setup tokens
pub struct SetupTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_seconds: i64,
    issuer: String,
}

impl SetupTokenService {
    /// Create a new setup token service
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `expiry_seconds` - Token lifetime from issuance
    /// * `issuer` - Issuer claim stamped into every token
    pub fn new(secret: &str, expiry_seconds: i64, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&issuer]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_seconds,
            issuer,
        }
    }

    /// Issue a setup token bound to the given account id
    pub fn issue(&self, account_id: Uuid) -> Result<String, DomainError> {
        let now = Utc::now();
        let claims = SetupTokenClaims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verify a setup token and return the bound account id
    pub fn verify(&self, token: &str) -> Result<Uuid, DomainError> {
        let data = decode::<SetupTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                _ => DomainError::Token(TokenError::InvalidToken),
            })?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| TokenError::InvalidToken.into())
    }
}
