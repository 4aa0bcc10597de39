//! Handler for `POST /users/forgot-password`

use actix_web::{web, HttpResponse};
use validator::Validate;

use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::ApiResponse;

use crate::dto::account::ForgotPasswordRequest;
use crate::handlers::error::error_response;

use super::AppState;

/// Open a password reset window and email the reset link
pub async fn forgot_password<R, M, S>(
    state: web::Data<AppState<R, M, S>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    if request.validate().is_err() {
        return error_response(&DomainError::validation("Email is required."));
    }

    match state.account_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message(
            "Password reset link sent to your email.",
        )),
        Err(e) => error_response(&e),
    }
}
