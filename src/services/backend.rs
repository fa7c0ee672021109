use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::error::{AppError, AppResult};

/// Client for the external document-processing service. One outbound
/// round-trip per call, no retry, no caching.
pub struct BackendClient {
    http: reqwest::Client,
    backend_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, backend_url: impl Into<String>) -> Self {
        Self {
            http,
            backend_url: backend_url.into(),
        }
    }

    /// Forwards one file as a multipart upload (field name `file`) and
    /// returns the transformed binary body.
    pub async fn submit_file(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<Bytes> {
        let size = bytes.len();
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        tracing::debug!(
            backend_url = %self.backend_url,
            file_name = %file_name,
            file_size = size,
            "Forwarding file to processing backend"
        );

        let response = self
            .http
            .post(&self.backend_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string();
            tracing::warn!(
                status = status.as_u16(),
                reason = %reason,
                "Processing backend returned an error"
            );
            return Err(AppError::BackendError {
                status: status.as_u16(),
                reason,
            });
        }

        Ok(response.bytes().await?)
    }

    /// Fetches a remote file by URL for the download-by-reference mode.
    pub async fn fetch_file(&self, url: &str) -> AppResult<Bytes> {
        tracing::debug!(url = %url, "Fetching remote file");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Remote fetch failed");
            return Err(AppError::FetchError {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
