//! Utility functions shared across server crates

pub mod email;
pub mod filename;
pub mod validation;

pub use email::mask_email;
pub use filename::sanitize_file_name;
