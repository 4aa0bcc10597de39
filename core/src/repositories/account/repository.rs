//! Account repository trait defining the interface for account persistence.
//!
//! This follows the repository pattern: the trait is async-first and lives in
//! the domain layer, while concrete database implementations live in the
//! infrastructure crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its login email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account holding the given reset token with an expiry still
    /// in the future at `now`.
    ///
    /// Token-not-found and token-expired both come back as `Ok(None)`; the
    /// caller cannot distinguish the two cases.
    async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Account>, DomainError>;

    /// List all accounts
    async fn list(&self) -> Result<Vec<Account>, DomainError>;

    /// List accounts with the given role (exact match)
    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account
    /// * `Err(DomainError::NotFound)` - No account with the given id
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Delete an account permanently
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
