//! Credential service implementation

use rand::RngCore;

use crate::errors::{CredentialError, DomainError};

use super::policy;

/// Number of random bytes in a reset token (256 bits of entropy)
const RESET_TOKEN_BYTES: usize = 32;

/// Stateless service for password and reset-token handling
#[derive(Debug, Clone)]
pub struct CredentialService {
    bcrypt_cost: u32,
}

impl CredentialService {
    /// Create a credential service with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a credential service with an explicit bcrypt cost.
    ///
    /// Tests use a low cost to keep hashing fast.
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }

    /// Validate a candidate password against the strength policy
    pub fn check_password_strength(&self, password: &str) -> Result<(), DomainError> {
        policy::check_strength(password)
            .map_err(|message| CredentialError::WeakPassword { message }.into())
    }

    /// Derive the deterministic temporary password for a fresh registration:
    /// first whitespace token of the full name followed by the last four
    /// characters of the contact number.
    pub fn derive_temporary_password(&self, full_name: &str, contact_number: &str) -> String {
        let first = full_name.split_whitespace().next().unwrap_or("");
        let digits: Vec<char> = contact_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("{}{}", first, tail)
    }

    /// Hash a password with bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|_| CredentialError::HashingFailed.into())
    }

    /// Verify a password against a stored bcrypt hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash).map_err(|_| CredentialError::HashingFailed.into())
    }

    /// Generate a cryptographically random, hex-encoded reset token
    pub fn generate_reset_token(&self) -> String {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for CredentialService {
    fn default() -> Self {
        Self::new()
    }
}
