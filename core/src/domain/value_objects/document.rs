//! Uploaded document value objects

use serde::{Deserialize, Serialize};

/// Kind of document that may be attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    /// Government-issued identity document
    ValidId,
    /// Resume / CV
    Resume,
}

impl DocumentKind {
    /// Path prefix inside the per-kind bucket
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            DocumentKind::ValidId => "validIds",
            DocumentKind::Resume => "resumes",
        }
    }

    /// Multipart field name this kind is posted under
    pub fn field_name(&self) -> &'static str {
        match self {
            DocumentKind::ValidId => "validId",
            DocumentKind::Resume => "resume",
        }
    }
}

/// An uploaded file, fully buffered in memory
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub kind: DocumentKind,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(
        kind: DocumentKind,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}
