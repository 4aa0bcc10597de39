//! Repository interfaces and in-memory implementations

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
