use serde::{Deserialize, Serialize};

/// Success body of `POST /api/process-word-file`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Transport-encoded processed document.
    pub file: String,
    #[serde(rename = "isBase64")]
    pub is_base64: bool,
    /// Derived output name (`processed_` prefix, original extension).
    pub filename: String,
    pub debug: DebugInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebugInfo {
    #[serde(rename = "originalFilename")]
    pub original_filename: String,
}

impl ProcessResponse {
    pub fn new(file: String, filename: String, original_filename: String) -> Self {
        Self {
            file,
            is_base64: true,
            filename,
            debug: DebugInfo { original_filename },
        }
    }
}

/// Body of `POST /api/download-processed-file`. Fields are optional so
/// missing ones surface as a structured 400 instead of a rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    #[serde(rename = "fileData")]
    pub file_data: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

/// Query of `GET /api/download-processed-file`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadQuery {
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
}
