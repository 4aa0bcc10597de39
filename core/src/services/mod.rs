//! Business services and collaborator interfaces

pub mod account;
pub mod credential;
pub mod mail;
pub mod storage;
pub mod token;

pub use account::{AccountService, AccountServiceConfig, RegisterAccount};
pub use credential::CredentialService;
pub use mail::{MailMessage, Mailer};
pub use storage::ObjectStorage;
pub use token::SetupTokenService;
