//! Mail delivery: SMTP transport and a logging mock

pub mod mock_mail;
pub mod smtp;

pub use mock_mail::MockMailer;
pub use smtp::SmtpMailer;
