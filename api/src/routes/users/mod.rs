//! Account route handlers:
//! - registration with document uploads
//! - forgot/reset password workflow
//! - requirements upload for the authenticated caller
//! - listing, lookup, verification and deletion

pub mod delete;
pub mod forgot_password;
pub mod get;
pub mod list;
pub mod me;
pub mod multipart;
pub mod register;
pub mod reset_password;
pub mod upload_requirements;
pub mod verify;

use std::sync::Arc;

use sd_core::repositories::AccountRepository;
use sd_core::services::account::AccountService;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;

/// Application state holding the shared account service
pub struct AppState<R, M, S>
where
    R: AccountRepository,
    M: Mailer,
    S: ObjectStorage,
{
    pub account_service: Arc<AccountService<R, M, S>>,
}
