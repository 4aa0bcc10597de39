//! Handler for `POST /users/reset-password`

use actix_web::{web, HttpResponse};
use validator::Validate;

use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::ApiResponse;

use crate::dto::account::ResetPasswordRequest;
use crate::handlers::error::error_response;

use super::AppState;

/// Complete a password reset with a single-use token
pub async fn reset_password<R, M, S>(
    state: web::Data<AppState<R, M, S>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    if request.validate().is_err() {
        return error_response(&DomainError::validation(
            "Token and new password are required.",
        ));
    }

    match state
        .account_service
        .reset_password(&request.token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message(
            "Password has been reset successfully.",
        )),
        Err(e) => error_response(&e),
    }
}
