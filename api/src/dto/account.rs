//! Account endpoint DTOs.
//!
//! Registration and the requirements upload arrive as multipart forms and
//! are parsed in the route layer; the JSON bodies below cover the credential
//! workflow.

use serde::Deserialize;
use validator::Validate;

/// Body for `POST /users/forgot-password`
#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, message = "Email is required."))]
    pub email: String,
}

/// Body for `POST /users/reset-password`
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Token is required."))]
    pub token: String,

    #[serde(rename = "newPassword")]
    #[validate(length(min = 1, message = "New password is required."))]
    pub new_password: String,
}
