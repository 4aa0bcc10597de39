//! Object storage configuration

use serde::{Deserialize, Serialize};

/// Object storage configuration (Supabase-style storage REST API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL of the storage service
    pub base_url: String,

    /// Service API key used for uploads
    pub api_key: String,

    /// Bucket for identity documents
    pub valid_id_bucket: String,

    /// Bucket for resumes
    pub resume_bucket: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:54321"),
            api_key: String::new(),
            valid_id_bucket: String::from("validid"),
            resume_bucket: String::from("resume"),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),
            api_key: std::env::var("STORAGE_API_KEY").unwrap_or_default(),
            valid_id_bucket: std::env::var("STORAGE_VALID_ID_BUCKET")
                .unwrap_or_else(|_| "validid".to_string()),
            resume_bucket: std::env::var("STORAGE_RESUME_BUCKET")
                .unwrap_or_else(|_| "resume".to_string()),
        }
    }

    /// Public URL for an object in the given bucket
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url.trim_end_matches('/'),
            bucket,
            path
        )
    }

    /// Upload endpoint for an object in the given bucket
    pub fn upload_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url.trim_end_matches('/'),
            bucket,
            path
        )
    }
}
