//! Object storage interface.
//!
//! Uploaded documents are forwarded to an external blob store that returns a
//! public URL. The concrete HTTP client lives in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::value_objects::document::DocumentKind;
use crate::errors::DomainError;

/// External blob store for account documents
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a fully buffered object under `path` in the bucket selected by
    /// `kind`, returning the public URL of the stored object.
    async fn upload(
        &self,
        kind: DocumentKind,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError>;
}
