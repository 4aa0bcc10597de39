//! # StaffDesk Console
//!
//! Client-side account list views: a REST client for the account endpoints
//! and an in-memory table model with role filtering, live search, name
//! sorting and a self-delete guard.

pub mod client;
pub mod views;

pub use client::{AccountsClient, ConsoleError};
pub use views::{AccountTable, SortOrder};
