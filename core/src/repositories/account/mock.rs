//! In-memory implementation of AccountRepository for tests and development

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};
use crate::errors::DomainError;

use super::repository::AccountRepository;

/// Mock account repository backed by a `HashMap`
#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an account, bypassing uniqueness checks
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| {
                a.reset_token.as_deref() == Some(token)
                    && a.reset_token_expires.is_some_and(|expires| now < expires)
            })
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .filter(|a| a.role == role)
            .cloned()
            .collect())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict {
                message: "Email already exists".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::not_found("account"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn account(email: &str, role: Role) -> Account {
        Account::new(
            "Test User".to_string(),
            email.to_string(),
            "09170001111".to_string(),
            role,
            "hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("a@example.com", Role::Admin)).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found.unwrap().email, "a@example.com");

        let by_email = repo.find_by_email("a@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = MockAccountRepository::new();
        repo.create(account("a@example.com", Role::Admin)).await.unwrap();

        let result = repo.create(account("a@example.com", Role::Staff)).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_by_role_exact_match() {
        let repo = MockAccountRepository::new();
        repo.create(account("a@example.com", Role::Admin)).await.unwrap();
        repo.create(account("s@example.com", Role::Staff)).await.unwrap();
        repo.create(account("s2@example.com", Role::Staff)).await.unwrap();

        assert_eq!(repo.list_by_role(Role::Staff).await.unwrap().len(), 2);
        assert_eq!(repo.list_by_role(Role::Superadmin).await.unwrap().len(), 0);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_reset_token_respects_expiry() {
        let repo = MockAccountRepository::new();
        let mut acc = account("a@example.com", Role::Admin);
        acc.open_reset_window("live".to_string(), Utc::now() + Duration::minutes(10));
        repo.insert(acc).await;

        let mut expired = account("b@example.com", Role::Admin);
        expired.open_reset_window("dead".to_string(), Utc::now() - Duration::minutes(1));
        repo.insert(expired).await;

        assert!(repo.find_by_reset_token("live", Utc::now()).await.unwrap().is_some());
        assert!(repo.find_by_reset_token("dead", Utc::now()).await.unwrap().is_none());
        assert!(repo.find_by_reset_token("unknown", Utc::now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("a@example.com", Role::Staff)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let repo = MockAccountRepository::new();
        let result = repo.update(account("a@example.com", Role::Staff)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
