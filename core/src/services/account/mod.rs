//! Account management service: registration, credential reset workflow,
//! document uploads and CRUD operations.

pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::{AccountService, RegisterAccount};
