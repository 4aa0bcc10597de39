//! Handler for `POST /users/upload-requirements` (authenticated)

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use sd_core::errors::DomainError;
use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_shared::types::response::MessageResponse;

use crate::handlers::error::error_response;
use crate::middleware::auth::AuthContext;

use super::multipart::{read_form, UploadLimit};
use super::AppState;

/// Attach identity documents to the caller's own account.
///
/// Only the fields with a newly uploaded file are replaced; the response is
/// a bare `{message}` body.
pub async fn upload_requirements<R, M, S>(
    auth: AuthContext,
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

    if form.documents.is_empty() {
        return error_response(&DomainError::validation("No files were uploaded."));
    }

    match state
        .account_service
        .upload_requirements(auth.account_id, form.documents)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Requirements uploaded successfully.")),
        Err(e) => error_response(&e),
    }
}
