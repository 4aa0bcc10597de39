//! Account entity representing an admin/staff user of the portal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Role of an account in the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Portal administrator
    Admin,
    /// Staff member
    Staff,
    /// Root account; cannot be deleted
    Superadmin,
}

impl Role {
    /// Lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(()),
        }
    }
}

/// Account entity representing a registered admin/staff user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Full name as entered at registration
    pub full_name: String,

    /// Login email, unique across accounts
    pub email: String,

    /// Contact phone number
    pub contact_number: String,

    /// Account role
    pub role: Role,

    /// Bcrypt hash of the current password; never serialized outward
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// True until the owner completes a self-service password reset
    pub is_temporary_password: bool,

    /// Set by the explicit verify action
    pub is_verified: bool,

    /// Open reset window token; present only between forgot-password and
    /// reset-password (or expiry)
    #[serde(skip_serializing, default)]
    pub reset_token: Option<String>,

    /// Absolute expiry of the reset token
    #[serde(skip_serializing, default)]
    pub reset_token_expires: Option<DateTime<Utc>>,

    /// Public URL of the uploaded identity document
    pub valid_id_url: Option<String>,

    /// Public URL of the uploaded resume
    pub resume_url: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account with a freshly hashed temporary password
    pub fn new(
        full_name: String,
        email: String,
        contact_number: String,
        role: Role,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            contact_number,
            role,
            password_hash,
            is_temporary_password: true,
            is_verified: false,
            reset_token: None,
            reset_token_expires: None,
            valid_id_url: None,
            resume_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified (idempotent)
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Opens a reset window with the given token and absolute expiry
    pub fn open_reset_window(&mut self, token: String, expires: DateTime<Utc>) {
        self.reset_token = Some(token);
        self.reset_token_expires = Some(expires);
        self.updated_at = Utc::now();
    }

    /// Rotates the password, consuming the reset window and clearing the
    /// temporary-password flag
    pub fn rotate_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_token = None;
        self.reset_token_expires = None;
        self.is_temporary_password = false;
        self.updated_at = Utc::now();
    }

    /// Attaches uploaded document URLs, preserving existing values when no
    /// replacement is supplied
    pub fn attach_documents(&mut self, valid_id_url: Option<String>, resume_url: Option<String>) {
        if valid_id_url.is_some() {
            self.valid_id_url = valid_id_url;
        }
        if resume_url.is_some() {
            self.resume_url = resume_url;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the account may be deleted
    pub fn is_deletable(&self) -> bool {
        self.role != Role::Superadmin
    }

    /// Whether a reset window is currently open at `now`
    pub fn has_open_reset_window(&self, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expires) {
            (Some(_), Some(expires)) => now < expires,
            _ => false,
        }
    }

}
