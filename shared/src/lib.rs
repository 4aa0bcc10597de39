//! Shared utilities and common types for the StaffDesk server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Utility functions (filename sanitization, basic validators)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, JwtConfig, MailConfig, ServerConfig, StorageConfig,
};
pub use types::{ApiResponse, MessageResponse};
pub use utils::{filename, validation};
