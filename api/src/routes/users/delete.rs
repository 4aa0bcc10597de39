//! Handler for `DELETE /users/{id}`

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::ApiResponse;

use crate::handlers::error::error_response;

use super::AppState;

/// Permanently delete an account; superadmin accounts are protected
pub async fn delete<R, M, S>(
    state: web::Data<AppState<R, M, S>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => return error_response(&DomainError::validation("Invalid account id.")),
    };

    match state.account_service.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message("User deleted successfully.")),
        Err(e) => error_response(&e),
    }
}
