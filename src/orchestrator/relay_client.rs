use reqwest::multipart::{Form, Part};

use crate::error::{AppError, AppResult};
use crate::models::{ProcessResponse, ProcessedArtifact, SourceFile};
use crate::orchestrator::SubmitRelay;

/// HTTP-backed [`SubmitRelay`]: posts one file to the submission relay
/// endpoint as multipart form data and parses the encoded result.
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

impl SubmitRelay for RelayClient {
    async fn submit(&self, file: &SourceFile) -> AppResult<ProcessedArtifact> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| AppError::validation(format!("Invalid media type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The relay reports failures as {"error": <message>}.
            let reason = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                });
            return Err(AppError::BackendError {
                status: status.as_u16(),
                reason,
            });
        }

        let body: ProcessResponse = response.json().await?;
        Ok(ProcessedArtifact::new(body.filename, body.file))
    }
}
