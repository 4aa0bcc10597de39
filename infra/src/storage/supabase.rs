//! Supabase-style object storage client.
//!
//! Uploads go to `POST {base}/storage/v1/object/{bucket}/{path}` with a
//! bearer service key; the returned URL is the bucket's public object URL.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, error};

use sd_core::domain::value_objects::document::DocumentKind;
use sd_core::errors::DomainError;
use sd_core::services::storage::ObjectStorage;
use sd_shared::config::storage::StorageConfig;

use crate::InfrastructureError;

const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Object storage client for the Supabase storage REST API
pub struct SupabaseStorage {
    client: reqwest::Client,
    config: StorageConfig,
}

impl SupabaseStorage {
    /// Create a new storage client from configuration
    pub fn new(config: StorageConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "STORAGE_API_KEY is not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self { client, config })
    }

    fn bucket_for(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::ValidId => &self.config.valid_id_bucket,
            DocumentKind::Resume => &self.config.resume_bucket,
        }
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        kind: DocumentKind,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let bucket = self.bucket_for(kind);
        let url = self.config.upload_url(bucket, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await
            .map_err(|e| InfrastructureError::Storage(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%bucket, %path, %status, "storage upload rejected");
            return Err(InfrastructureError::Storage(format!(
                "Upload failed with status {}: {}",
                status, body
            ))
            .into());
        }

        debug!(%bucket, %path, "object uploaded");
        Ok(self.config.public_url(bucket, path))
    }
}
