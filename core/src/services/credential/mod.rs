//! Credential workflow: password policy, temporary password derivation,
//! hashing and reset token generation.

pub mod policy;
pub mod service;

pub use service::CredentialService;
