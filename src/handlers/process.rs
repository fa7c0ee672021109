use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::codec;
use crate::error::{AppError, AppResult};
use crate::models::ProcessResponse;
use crate::services::{derive_output_name, BackendClient};
use crate::state::AppState;

/// Submission relay: accepts one file under field name `file`, forwards it
/// to the processing backend, and returns the transformed document encoded
/// for transport along with its derived output name.
pub async fn process_word_file_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ProcessResponse>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

    info!(request_id = %request_id, "Starting file processing request");

    let (file_name, data) = match read_file_field(&mut multipart).await {
        Ok((name, data)) => {
            info!(
                request_id = %request_id,
                file_name = %name,
                file_size = data.len(),
                "File extracted from multipart form"
            );
            (name, data)
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to extract file from multipart");
            return Err(e);
        }
    };

    let max_size_bytes = state.config.max_file_size_mb * 1024 * 1024;
    if data.len() > max_size_bytes {
        warn!(
            request_id = %request_id,
            file_size = data.len(),
            max_size = max_size_bytes,
            "File size exceeds limit"
        );
        return Err(AppError::FileTooLarge {
            size: data.len() / (1024 * 1024),
            limit: state.config.max_file_size_mb,
        });
    }

    let backend = BackendClient::new(state.http.clone(), state.config.backend_url.clone());
    let processed = match backend.submit_file(&file_name, data).await {
        Ok(bytes) => {
            info!(
                request_id = %request_id,
                processed_size = bytes.len(),
                "Backend processing completed"
            );
            bytes
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Backend processing failed");
            return Err(e);
        }
    };

    let encoded = codec::encode(&processed);
    let filename = derive_output_name(&file_name);

    info!(
        request_id = %request_id,
        filename = %filename,
        total_time_ms = start.elapsed().as_millis() as u64,
        "Request completed successfully"
    );

    Ok(Json(ProcessResponse::new(encoded, filename, file_name)))
}

async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or("");

        if field_name == "file" {
            let file_name = field.file_name().unwrap_or("document.docx").to_string();

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read file data: {}", e)))?;

            if data.is_empty() {
                return Err(AppError::validation("File is empty"));
            }

            debug!("Extracted file: {} ({} bytes)", file_name, data.len());

            return Ok((file_name, data.to_vec()));
        }
    }

    Err(AppError::MissingFile)
}
