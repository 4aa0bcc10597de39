//! Signed setup tokens for the first-login password flow

pub mod service;

pub use service::{SetupTokenClaims, SetupTokenService};
