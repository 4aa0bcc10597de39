//! # StaffDesk Core
//!
//! Core business logic and domain layer for the StaffDesk backend.
//! This crate contains domain entities, business services, repository and
//! collaborator interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::account::{Account, Role};
pub use domain::value_objects::{AccountView, DocumentKind, DocumentUpload};
pub use errors::{CredentialError, DomainError, DomainResult, TokenError};
pub use repositories::{AccountRepository, MockAccountRepository};
pub use services::{
    AccountService, AccountServiceConfig, CredentialService, MailMessage, Mailer, ObjectStorage,
    RegisterAccount, SetupTokenService,
};
