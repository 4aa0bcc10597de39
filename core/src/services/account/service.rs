//! Main account service implementation

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use sd_shared::utils::email::{is_valid_email, mask_email};
use sd_shared::utils::filename::sanitize_file_name;
use sd_shared::utils::validation::{length_between, not_empty};

use crate::domain::entities::account::{Account, Role};
use crate::domain::value_objects::account_view::AccountView;
use crate::domain::value_objects::document::{DocumentKind, DocumentUpload};
use crate::errors::{CredentialError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::credential::CredentialService;
use crate::services::mail::{MailMessage, Mailer};
use crate::services::storage::ObjectStorage;
use crate::services::token::SetupTokenService;

use super::config::AccountServiceConfig;

/// Upper bound on the stored full name, matching the column width
const MAX_NAME_LENGTH: usize = 255;

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterAccount {
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub role: Role,
    /// Optional identity document / resume attachments
    pub documents: Vec<DocumentUpload>,
}

/// Account management service composing the repository with the mail and
/// storage collaborators
pub struct AccountService<R, M, S>
where
    R: AccountRepository,
    M: Mailer,
    S: ObjectStorage,
{
    repository: Arc<R>,
    mailer: Arc<M>,
    storage: Arc<S>,
    setup_tokens: Arc<SetupTokenService>,
    credentials: CredentialService,
    config: AccountServiceConfig,
}

impl<R, M, S> AccountService<R, M, S>
where
    R: AccountRepository,
    M: Mailer,
    S: ObjectStorage,
{
    /// Create a new account service
    pub fn new(
        repository: Arc<R>,
        mailer: Arc<M>,
        storage: Arc<S>,
        setup_tokens: Arc<SetupTokenService>,
        credentials: CredentialService,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            repository,
            mailer,
            storage,
            setup_tokens,
            credentials,
            config,
        }
    }

    /// Register a new admin/staff account.
    ///
    /// Uploads any attachments first (a failed upload aborts the whole
    /// registration), persists the account with a hashed deterministic
    /// temporary password, then sends the welcome email with the temporary
    /// password and a signed setup link.
    pub async fn register(&self, input: RegisterAccount) -> DomainResult<AccountView> {
        if !not_empty(&input.full_name) {
            return Err(DomainError::validation("Full name is required."));
        }
        if !length_between(&input.full_name, 1, MAX_NAME_LENGTH) {
            return Err(DomainError::validation("Full name is too long."));
        }
        if !is_valid_email(&input.email) {
            return Err(DomainError::validation("A valid email is required."));
        }
        if !not_empty(&input.contact_number) {
            return Err(DomainError::validation("Contact number is required."));
        }

        if self.repository.exists_by_email(&input.email).await? {
            return Err(DomainError::Conflict {
                message: "Email already exists".to_string(),
            });
        }

        let (valid_id_url, resume_url) = self.upload_documents(&input.documents).await?;

        let temp_password = self
            .credentials
            .derive_temporary_password(&input.full_name, &input.contact_number);
        let password_hash = self.credentials.hash_password(&temp_password)?;

        let mut account = Account::new(
            input.full_name,
            input.email,
            input.contact_number,
            input.role,
            password_hash,
        );
        account.attach_documents(valid_id_url, resume_url);

        let account = self.repository.create(account).await?;

        let setup_token = self.setup_tokens.issue(account.id)?;
        let setup_link = format!(
            "{}/new-password?token={}",
            self.config.frontend_url, setup_token
        );

        let message = MailMessage::text(
            account.email.clone(),
            "Welcome to the StaffDesk Admin Portal",
            welcome_email_body(&account, &temp_password, &setup_link),
        );
        self.mailer.send(message).await?;

        info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            role = %account.role,
            "account registered"
        );

        Ok(account.into())
    }

    /// Open a password reset window and email the reset link.
    ///
    /// Unknown emails return `NotFound`; see DESIGN.md for the enumeration
    /// trade-off this keeps.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if !not_empty(email) {
            return Err(DomainError::validation("Email is required."));
        }

        let mut account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        let token = self.credentials.generate_reset_token();
        let expires = Utc::now() + Duration::seconds(self.config.reset_token_expiry_seconds);
        account.open_reset_window(token.clone(), expires);
        let account = self.repository.update(account).await?;

        let reset_link = format!(
            "{}/reset-password-admin?token={}",
            self.config.frontend_url, token
        );
        let message = MailMessage::text(
            account.email.clone(),
            "Password Reset Request",
            reset_email_text(&account.full_name, &reset_link),
        )
        .with_html(reset_email_html(&account.full_name, &reset_link));
        self.mailer.send(message).await?;

        info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            "reset link sent"
        );

        Ok(())
    }

    /// Complete a password reset.
    ///
    /// The token is single-use: a successful reset clears it, and expired or
    /// unknown tokens are reported as one merged error.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        if token.trim().is_empty() {
            return Err(DomainError::validation(
                "Token and new password are required.",
            ));
        }
        self.credentials.check_password_strength(new_password)?;

        let mut account = self
            .repository
            .find_by_reset_token(token, Utc::now())
            .await?
            .ok_or(CredentialError::InvalidOrExpiredToken)?;

        let password_hash = self.credentials.hash_password(new_password)?;
        account.rotate_password(password_hash);
        self.repository.update(account).await?;

        Ok(())
    }

    /// Attach identity documents to an authenticated caller's account.
    ///
    /// Only fields with a newly uploaded file are replaced.
    pub async fn upload_requirements(
        &self,
        account_id: Uuid,
        documents: Vec<DocumentUpload>,
    ) -> DomainResult<AccountView> {
        let mut account = self
            .repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        let (valid_id_url, resume_url) = self.upload_documents(&documents).await?;
        account.attach_documents(valid_id_url, resume_url);

        let account = self.repository.update(account).await?;
        Ok(account.into())
    }

    /// List all accounts (password hash structurally excluded)
    pub async fn list(&self) -> DomainResult<Vec<AccountView>> {
        let accounts = self.repository.list().await?;
        Ok(accounts.into_iter().map(AccountView::from).collect())
    }

    /// List accounts with the given role
    pub async fn list_by_role(&self, role: Role) -> DomainResult<Vec<AccountView>> {
        let accounts = self.repository.list_by_role(role).await?;
        Ok(accounts.into_iter().map(AccountView::from).collect())
    }

    /// Look up a single account
    pub async fn get(&self, id: Uuid) -> DomainResult<AccountView> {
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;
        Ok(account.into())
    }

    /// Mark an account as verified (idempotent)
    pub async fn verify(&self, id: Uuid) -> DomainResult<()> {
        let mut account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        account.verify();
        self.repository.update(account).await?;
        Ok(())
    }

    /// Permanently delete an account; superadmin accounts are protected
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        if !account.is_deletable() {
            warn!(account_id = %id, "refused to delete superadmin account");
            return Err(DomainError::Forbidden {
                message: "Superadmin accounts cannot be deleted.".to_string(),
            });
        }

        self.repository.delete(id).await?;
        info!(account_id = %id, "account deleted");
        Ok(())
    }

    /// Upload each document under a timestamp-prefixed, sanitized path and
    /// return the resulting URLs per kind. Any failure aborts.
    async fn upload_documents(
        &self,
        documents: &[DocumentUpload],
    ) -> DomainResult<(Option<String>, Option<String>)> {
        let mut valid_id_url = None;
        let mut resume_url = None;

        for doc in documents {
            let path = storage_path(doc.kind, &doc.file_name);
            let url = self
                .storage
                .upload(doc.kind, &path, doc.bytes.clone(), &doc.content_type)
                .await?;
            match doc.kind {
                DocumentKind::ValidId => valid_id_url = Some(url),
                DocumentKind::Resume => resume_url = Some(url),
            }
        }

        Ok((valid_id_url, resume_url))
    }
}

/// Timestamp-prefixed storage path for an uploaded document
fn storage_path(kind: DocumentKind, file_name: &str) -> String {
    format!(
        "{}/{}_{}",
        kind.storage_prefix(),
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

fn welcome_email_body(account: &Account, temp_password: &str, setup_link: &str) -> String {
    format!(
        "Hello {},\n\n\
         You have been registered as a {} in the StaffDesk Admin Portal.\n\n\
         Login Email: {}\n\
         Temporary Password: {}\n\n\
         Please log in using your temporary password and set a new one here:\n\
         {}\n\n\
         Regards,\n\
         StaffDesk Management\n",
        account.full_name,
        account.role.as_str().to_uppercase(),
        account.email,
        temp_password,
        setup_link,
    )
}

fn reset_email_text(full_name: &str, reset_link: &str) -> String {
    format!(
        "Hello {},\n\n\
         You requested a password reset for your StaffDesk Admin account.\n\
         Reset your password here (valid 10 minutes): {}\n\n\
         If this wasn't you, ignore this email.\n\n\
         - StaffDesk Management",
        full_name, reset_link,
    )
}

fn reset_email_html(full_name: &str, reset_link: &str) -> String {
    format!(
        "<p>Hello {},</p>\
         <p>You requested a password reset for your StaffDesk Admin account.</p>\
         <p>This link is valid for 10 minutes:</p>\
         <p><a href=\"{link}\" target=\"_blank\">{link}</a></p>\
         <p>If this wasn't you, ignore this email.</p>\
         <p>&mdash; StaffDesk Management</p>",
        full_name,
        link = reset_link,
    )
}
