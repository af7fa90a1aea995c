//! REST implementation of [`ResourceStore`].

use reqwest::header::AUTHORIZATION;
use reqwest::{Response, StatusCode};
use serde::Deserialize;

use resmap_app::ports::ResourceStore;
use resmap_domain::error::ResMapError;
use resmap_domain::resource::{NewResource, Resource};

use crate::error::RestStoreError;

const COLLECTION_PATH: &str = "/rest/v1/resources";

/// Error descriptor shape the backend returns on failed operations.
#[derive(Deserialize)]
struct BackendErrorBody {
    message: String,
}

/// Store client talking to the backend's PostgREST-style interface.
///
/// Holds one [`reqwest::Client`]; constructed once at startup and shared
/// read-only across requests.
pub struct RestResourceStore {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl RestResourceStore {
    /// Create a store client for the given endpoint and credential.
    #[must_use]
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Full URL of the `resources` collection.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.base_url)
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.collection_url())
            .query(&[("select", "*")])
            .header("apikey", &self.key)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
    }

    /// Turn a non-success response into the backend's error message.
    async fn backend_error(response: Response) -> RestStoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        RestStoreError::Backend(extract_message(status, &body))
    }
}

/// Pull the `message` field out of a backend error body, falling back to
/// the raw body, then to the status line.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<BackendErrorBody>(body) {
        return err.message;
    }
    if body.trim().is_empty() {
        format!("store responded with HTTP {status}")
    } else {
        body.trim().to_string()
    }
}

impl ResourceStore for RestResourceStore {
    async fn list_all(&self) -> Result<Vec<Resource>, ResMapError> {
        let response = self
            .request(reqwest::Method::GET)
            .send()
            .await
            .map_err(RestStoreError::from)?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await.into());
        }

        let rows = response
            .json::<Vec<Resource>>()
            .await
            .map_err(RestStoreError::from)?;
        Ok(rows)
    }

    async fn insert(&self, draft: NewResource) -> Result<Resource, ResMapError> {
        let response = self
            .request(reqwest::Method::POST)
            // Asks the backend to echo the inserted row back.
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await
            .map_err(RestStoreError::from)?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await.into());
        }

        let mut rows = response
            .json::<Vec<Resource>>()
            .await
            .map_err(RestStoreError::from)?;

        match rows.pop() {
            Some(row) if rows.is_empty() => Ok(row),
            _ => Err(RestStoreError::Backend(
                "insert did not return exactly one row".to_string(),
            )
            .into()),
        }
    }
}
