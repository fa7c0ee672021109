use axum::{
    body::Body,
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::Response,
    Json,
};
use tracing::{error, info};

use crate::codec;
use crate::error::{AppError, AppResult};
use crate::models::{DownloadQuery, DownloadRequest, DOCX_MIME};
use crate::services::BackendClient;
use crate::state::AppState;

/// Attachment name used when downloading by remote reference.
pub const DEFAULT_DOWNLOAD_NAME: &str = "processed-document.docx";

/// Retrieval relay, by-payload mode: decodes the transport-encoded document
/// and returns the raw bytes as a named attachment. Stateless; identical
/// input yields byte-identical output.
pub async fn download_by_payload_handler(
    Json(request): Json<DownloadRequest>,
) -> AppResult<Response> {
    let file_data = match request.file_data.as_deref() {
        Some(data) if !data.is_empty() => data,
        _ => return Err(AppError::MissingField { field: "fileData" }),
    };
    let file_name = match request.file_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::MissingField { field: "fileName" }),
    };

    let bytes = match codec::decode(file_data) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(file_name = %file_name, error = %e, "Failed to decode file payload");
            return Err(e);
        }
    };

    info!(
        file_name = %file_name,
        file_size = bytes.len(),
        "Serving processed file download"
    );

    attachment_response(bytes, file_name)
}

/// Retrieval relay, by-reference mode: fetches a remote file and relays the
/// body unchanged under a fixed default attachment name.
pub async fn download_by_reference_handler(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> AppResult<Response> {
    let file_url = match query.file_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::MissingField { field: "fileUrl" }),
    };

    let backend = BackendClient::new(state.http.clone(), state.config.backend_url.clone());
    let bytes = backend.fetch_file(file_url).await?;

    info!(
        file_url = %file_url,
        file_size = bytes.len(),
        "Relaying remote file download"
    );

    attachment_response(bytes.to_vec(), DEFAULT_DOWNLOAD_NAME)
}

fn attachment_response(bytes: Vec<u8>, file_name: &str) -> AppResult<Response> {
    Response::builder()
        .header(CONTENT_TYPE, DOCX_MIME)
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::internal(format!("Failed to build download response: {}", e)))
}
