//! REST client for the account endpoints.
//!
//! Caches the authenticated caller's identity after `fetch_me` so the view
//! layer can refuse self-deletion before any request goes out.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use sd_core::domain::value_objects::account_view::AccountView;
use sd_shared::types::response::ApiResponse;

/// Console-side errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("You cannot delete your own account")]
    SelfDelete,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the account collection
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
    /// Cached identity of the authenticated caller
    current: Option<AccountView>,
}

impl AccountsClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            current: None,
        }
    }

    /// The cached caller identity, if fetched
    pub fn current_identity(&self) -> Option<&AccountView> {
        self.current.as_ref()
    }

    /// Fetch and cache the caller's own profile
    pub async fn fetch_me(&mut self, token: &str) -> Result<AccountView, ConsoleError> {
        let response = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check(response).await?;

        let body: ApiResponse<AccountView> = response.json().await?;
        let view = body.into_data().ok_or_else(|| ConsoleError::Api {
            status: StatusCode::OK,
            message: "Missing profile data in response".to_string(),
        })?;
        self.current = Some(view.clone());
        Ok(view)
    }

    /// Fetch every account
    pub async fn fetch_accounts(&self) -> Result<Vec<AccountView>, ConsoleError> {
        let response = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch accounts with the given role
    pub async fn fetch_by_role(&self, role: &str) -> Result<Vec<AccountView>, ConsoleError> {
        let response = self
            .http
            .get(format!("{}/users/role/{}", self.base_url, role))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Delete an account.
    ///
    /// Refused locally when the id matches the cached caller identity; the
    /// request is never sent in that case.
    pub async fn delete_account(&self, id: Uuid) -> Result<(), ConsoleError> {
        if self.current.as_ref().is_some_and(|me| me.id == id) {
            return Err(ConsoleError::SelfDelete);
        }

        let response = self
            .http
            .delete(format!("{}/users/{}", self.base_url, id))
            .send()
            .await?;
        check(response).await?;

        info!(account_id = %id, "account deleted");
        Ok(())
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ConsoleError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| "Request failed".to_string());

    Err(ConsoleError::Api { status, message })
}
