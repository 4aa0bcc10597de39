//! Outward-facing account representation.
//!
//! Every listing and lookup response is shaped through this view, which
//! structurally cannot carry the password hash or reset token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Role};

/// Public projection of an [`Account`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub role: Role,
    pub is_temporary_password: bool,
    pub is_verified: bool,
    #[serde(rename = "validId", skip_serializing_if = "Option::is_none")]
    pub valid_id_url: Option<String>,
    #[serde(rename = "resume", skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name,
            email: account.email,
            contact_number: account.contact_number,
            role: account.role,
            is_temporary_password: account.is_temporary_password,
            is_verified: account.is_verified,
            valid_id_url: account.valid_id_url,
            resume_url: account.resume_url,
            created_at: account.created_at,
        }
    }
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        account.clone().into()
    }
}
