//! Value objects crossing the domain boundary

pub mod account_view;
pub mod document;

pub use account_view::AccountView;
pub use document::{DocumentKind, DocumentUpload};
