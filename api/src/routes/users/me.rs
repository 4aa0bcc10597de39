//! Handler for `GET /users/me` (authenticated)

use actix_web::{web, HttpResponse};

use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::ApiResponse;

use crate::handlers::error::error_response;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Profile of the authenticated caller
pub async fn me<R, M, S>(auth: AuthContext, state: web::Data<AppState<R, M, S>>) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    match state.account_service.get(auth.account_id).await {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(e) => error_response(&e),
    }
}
