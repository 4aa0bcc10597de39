//! Handlers for `GET /users` and `GET /users/role/{role}`

use actix_web::{web, HttpResponse};

use sd_core::domain::entities::account::Role;
use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;

use crate::handlers::error::error_response;

use super::AppState;

/// List all accounts
pub async fn list<R, M, S>(state: web::Data<AppState<R, M, S>>) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    match state.account_service.list().await {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(e) => error_response(&e),
    }
}

/// List accounts with the given role
pub async fn list_by_role<R, M, S>(
    state: web::Data<AppState<R, M, S>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    let role = match path.to_lowercase().parse::<Role>() {
        Ok(role) => role,
        Err(_) => return error_response(&DomainError::validation("Unknown role.")),
    };

    match state.account_service.list_by_role(role).await {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(e) => error_response(&e),
    }
}
