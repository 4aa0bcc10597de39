//! Handler for `POST /users/register`

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use tracing::warn;

use sd_core::domain::entities::account::Role;
use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::account::RegisterAccount;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::ApiResponse;

use crate::handlers::error::error_response;

use super::multipart::{read_form, UploadLimit};
use super::AppState;

/// Register a new admin/staff account from a multipart form.
///
/// Expects `fullName`, `email`, `role` and `contactNumber` text parts plus
/// optional `validId` / `resume` file parts. Responds 201 with a message-only
/// body; credentials are delivered by email, never echoed.
pub async fn register<R, M, S>(
    state: web::Data<AppState<R, M, S>>,
    limit: web::Data<UploadLimit>,
    payload: Multipart,
) -> HttpResponse
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    let form = match read_form(payload, limit.max_bytes).await {
        Ok(form) => form,
        Err(e) => return error_response(&e),
    };

    let input = match build_input(&form) {
        Ok(mut input) => {
            input.documents = form.documents;
            input
        }
        Err(e) => {
            warn!("registration rejected: {}", e);
            return error_response(&e);
        }
    };

    match state.account_service.register(input).await {
        Ok(_) => HttpResponse::Created().json(ApiResponse::<()>::message(
            "Account registered successfully. Login details have been sent by email.",
        )),
        Err(e) => error_response(&e),
    }
}

fn build_input(form: &super::multipart::ParsedForm) -> Result<RegisterAccount, DomainError> {
    let full_name = form.require("fullName", "Full name is required.")?;
    let email = form.require("email", "Email is required.")?;
    let contact_number = form.require("contactNumber", "Contact number is required.")?;
    let role = form
        .require("role", "Role is required.")?
        .to_lowercase()
        .parse::<Role>()
        .map_err(|_| DomainError::validation("Unknown role."))?;

    Ok(RegisterAccount {
        full_name,
        email,
        contact_number,
        role,
        documents: Vec::new(),
    })
}
