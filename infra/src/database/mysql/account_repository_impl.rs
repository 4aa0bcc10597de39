//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts are keyed by a CHAR(36) UUID; the role column stores the
//! lowercase role name. Reset token lookups push the expiry comparison into
//! the query so expired and unknown tokens are indistinguishable to callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sd_core::domain::entities::account::{Account, Role};
use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;

const ACCOUNT_COLUMNS: &str = r#"
    id, full_name, email, contact_number, role, password_hash,
    is_temporary_password, is_verified, reset_token, reset_token_expires,
    valid_id_url, resume_url, created_at, updated_at
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("id", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| db_error("role", e))?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| db_error("full_name", e))?,
            email: row.try_get("email").map_err(|e| db_error("email", e))?,
            contact_number: row
                .try_get("contact_number")
                .map_err(|e| db_error("contact_number", e))?,
            role: role.parse::<Role>().map_err(|_| DomainError::Database {
                message: format!("Unknown role: {}", role),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("password_hash", e))?,
            is_temporary_password: row
                .try_get("is_temporary_password")
                .map_err(|e| db_error("is_temporary_password", e))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| db_error("is_verified", e))?,
            reset_token: row
                .try_get("reset_token")
                .map_err(|e| db_error("reset_token", e))?,
            reset_token_expires: row
                .try_get("reset_token_expires")
                .map_err(|e| db_error("reset_token_expires", e))?,
            valid_id_url: row
                .try_get("valid_id_url")
                .map_err(|e| db_error("valid_id_url", e))?,
            resume_url: row
                .try_get("resume_url")
                .map_err(|e| db_error("resume_url", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", e))?,
        })
    }
}

fn db_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

/// The unique index on `email` is the source of truth for duplicates, so a
/// concurrent duplicate insert still surfaces as a conflict.
fn insert_error(e: sqlx::Error) -> DomainError {
    if e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return DomainError::Conflict {
            message: "Email already exists".to_string(),
        };
    }

    DomainError::Database {
        message: format!("Failed to create account: {}", e),
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE id = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        result.map(|row| Self::row_to_account(&row)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        result.map(|row| Self::row_to_account(&row)).transpose()
    }

    async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE reset_token = ? AND reset_token_expires > ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(token)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        result.map(|row| Self::row_to_account(&row)).transpose()
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts ORDER BY created_at DESC",
            ACCOUNT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE role = ? ORDER BY created_at DESC",
            ACCOUNT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, full_name, email, contact_number, role, password_hash,
                is_temporary_password, is_verified, reset_token, reset_token_expires,
                valid_id_url, resume_url, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.full_name)
            .bind(&account.email)
            .bind(&account.contact_number)
            .bind(account.role.as_str())
            .bind(&account.password_hash)
            .bind(account.is_temporary_password)
            .bind(account.is_verified)
            .bind(&account.reset_token)
            .bind(account.reset_token_expires)
            .bind(&account.valid_id_url)
            .bind(&account.resume_url)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                full_name = ?,
                email = ?,
                contact_number = ?,
                role = ?,
                password_hash = ?,
                is_temporary_password = ?,
                is_verified = ?,
                reset_token = ?,
                reset_token_expires = ?,
                valid_id_url = ?,
                resume_url = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let updated_at = Utc::now();
        let result = sqlx::query(query)
            .bind(&account.full_name)
            .bind(&account.email)
            .bind(&account.contact_number)
            .bind(account.role.as_str())
            .bind(&account.password_hash)
            .bind(account.is_temporary_password)
            .bind(account.is_verified)
            .bind(&account.reset_token)
            .bind(account.reset_token_expires)
            .bind(&account.valid_id_url)
            .bind(&account.resume_url)
            .bind(updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update account: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("account"));
        }

        let mut updated = account;
        updated.updated_at = updated_at;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete account: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?) AS account_exists")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        let exists: i8 = row
            .try_get("account_exists")
            .map_err(|e| db_error("account_exists", e))?;

        Ok(exists == 1)
    }
}
