//! Two-phase upload client for the disk storage HTTP API.
//!
//! Phase one exchanges a destination path for a one-time upload URL; phase
//! two PUTs the payload bytes to that URL. Both calls carry a fixed
//! `Authorization: OAuth <token>` header set at construction time.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use thiserror::Error;

/// Production API base. Tests point `with_base_url` at a local server.
pub const DISK_API_BASE: &str = "https://cloud-api.yandex.net";

const UPLOAD_RESOURCE: &str = "/v1/disk/resources/upload";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid access token")]
    InvalidToken,

    #[error("upload URL request rejected with status {status}")]
    Resolve { status: StatusCode },

    #[error("upload URL response has no href field")]
    MissingHref,

    #[error("transfer rejected with status {status}")]
    Transfer { status: StatusCode },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct DiskClient {
    client: reqwest::Client,
    base_url: String,
}

impl DiskClient {
    pub fn new(token: &str) -> Result<Self, UploadError> {
        Self::with_base_url(token, DISK_API_BASE)
    }

    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self, UploadError> {
        let mut auth = HeaderValue::from_str(&format!("OAuth {token}"))
            .map_err(|_| UploadError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Exchanges `remote_path` for a one-time upload URL. Overwrite is
    /// always forced on, so an existing object is silently replaced.
    async fn resolve_upload_url(&self, remote_path: &str) -> Result<String, UploadError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, UPLOAD_RESOURCE))
            .query(&[("path", remote_path), ("overwrite", "true")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Resolve { status });
        }

        let body: serde_json::Value = response.json().await?;
        body.get("href")
            .and_then(|href| href.as_str())
            .map(str::to_string)
            .ok_or(UploadError::MissingHref)
    }

    pub async fn upload(&self, payload: Vec<u8>, remote_path: &str) -> Result<(), UploadError> {
        let href = self.resolve_upload_url(remote_path).await?;
        tracing::debug!("Uploading to {}", href);

        let response = self.client.put(&href).body(payload).send().await?;

        // The storage API answers 201/202 on success. Reference clients
        // ignored this status; a failed transfer must not pass as success.
        let status = response.status();
        if !status.is_success() && !status.is_redirection() {
            return Err(UploadError::Transfer { status });
        }
        Ok(())
    }
}
