//! Multipart form parsing shared by the registration and requirements
//! upload endpoints.
//!
//! Text parts land in a field map; the `validId` and `resume` file parts are
//! buffered into [`DocumentUpload`]s. The reader enforces a total payload cap
//! across all parts, so buffering in memory is acceptable here.

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use std::collections::HashMap;

use sd_core::domain::value_objects::document::{DocumentKind, DocumentUpload};
use sd_core::errors::DomainError;
use sd_shared::utils::validation::not_empty;

const FALLBACK_FILE_NAME: &str = "upload";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Total multipart payload cap, injected as app data from the server config
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit {
    pub max_bytes: usize,
}

/// Parsed multipart form: text fields plus buffered document uploads
#[derive(Debug, Default)]
pub struct ParsedForm {
    fields: HashMap<String, String>,
    pub documents: Vec<DocumentUpload>,
}

impl ParsedForm {
    /// Look up a text field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Require a non-empty text field
    pub fn require(&self, name: &str, message: &str) -> Result<String, DomainError> {
        match self.field(name) {
            Some(value) if not_empty(value) => Ok(value.to_string()),
            _ => Err(DomainError::validation(message)),
        }
    }
}

/// Read a multipart payload into a [`ParsedForm`].
///
/// The running total of bytes read across all parts may not exceed
/// `max_bytes`; past the limit the payload is rejected without buffering the
/// rest.
pub async fn read_form(mut payload: Multipart, max_bytes: usize) -> Result<ParsedForm, DomainError> {
    let mut form = ParsedForm::default();
    let mut remaining = max_bytes;

    while let Some(mut field) = payload.try_next().await.map_err(payload_error)? {
        let name = field.name().to_string();

        if let Some(kind) = document_kind(&name) {
            let file_name = field
                .content_disposition()
                .get_filename()
                .unwrap_or(FALLBACK_FILE_NAME)
                .to_string();
            let content_type = field
                .content_type()
                .map(|mime| mime.to_string())
                .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

            let bytes = read_bytes(&mut field, &mut remaining).await?;
            if bytes.is_empty() {
                // Browsers send an empty part for file inputs left blank
                continue;
            }

            form.documents.push(DocumentUpload {
                kind,
                file_name,
                content_type,
                bytes,
            });
        } else {
            let bytes = read_bytes(&mut field, &mut remaining).await?;
            let value = String::from_utf8(bytes)
                .map_err(|_| DomainError::validation(format!("Field {} is not valid UTF-8.", name)))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

fn document_kind(field_name: &str) -> Option<DocumentKind> {
    if field_name == DocumentKind::ValidId.field_name() {
        Some(DocumentKind::ValidId)
    } else if field_name == DocumentKind::Resume.field_name() {
        Some(DocumentKind::Resume)
    } else {
        None
    }
}

async fn read_bytes(
    field: &mut actix_multipart::Field,
    remaining: &mut usize,
) -> Result<Vec<u8>, DomainError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(payload_error)? {
        if chunk.len() > *remaining {
            return Err(DomainError::validation(
                "Uploaded payload exceeds the maximum allowed size.",
            ));
        }
        *remaining -= chunk.len();
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn payload_error(e: actix_multipart::MultipartError) -> DomainError {
    DomainError::validation(format!("Malformed multipart payload: {}", e))
}
