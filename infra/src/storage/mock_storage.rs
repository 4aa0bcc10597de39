//! Mock object storage for development and testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use sd_core::domain::value_objects::document::DocumentKind;
use sd_core::errors::DomainError;
use sd_core::services::storage::ObjectStorage;

/// Mock storage that fabricates public URLs instead of uploading
#[derive(Clone)]
pub struct MockObjectStorage {
    upload_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockObjectStorage {
    /// Create a new mock storage
    pub fn new() -> Self {
        Self {
            upload_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock storage that fails every upload
    pub fn failing() -> Self {
        Self {
            upload_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Number of uploads performed so far
    pub fn upload_count(&self) -> u64 {
        self.upload_count.load(Ordering::SeqCst)
    }
}

impl Default for MockObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload(
        &self,
        kind: DocumentKind,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, DomainError> {
        if self.simulate_failure {
            warn!(%path, "mock storage simulating upload failure");
            return Err(DomainError::Upstream {
                service: "storage".to_string(),
                message: "Simulated upload failure".to_string(),
            });
        }

        let count = self.upload_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            target: "storage",
            provider = "mock",
            field = kind.field_name(),
            %path,
            size = bytes.len(),
            count,
            "mock object stored"
        );
        Ok(format!("https://storage.local/{}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fabricates_url_and_counts() {
        let storage = MockObjectStorage::new();
        let url = storage
            .upload(
                DocumentKind::Resume,
                "resumes/1_cv.pdf",
                vec![1, 2, 3],
                "application/pdf",
            )
            .await
            .unwrap();
        assert_eq!(url, "https://storage.local/resumes/1_cv.pdf");
        assert_eq!(storage.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let storage = MockObjectStorage::failing();
        let result = storage
            .upload(DocumentKind::ValidId, "validIds/1_id.png", vec![], "image/png")
            .await;
        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }
}
