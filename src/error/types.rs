use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;
use chrono;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file provided")]
    MissingFile,

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("File too large: {size}MB exceeds limit of {limit}MB")]
    FileTooLarge { size: usize, limit: usize },

    #[error("Decode error: {message}")]
    DecodeError { message: String },

    #[error("Backend error: {status} {reason}")]
    BackendError { status: u16, reason: String },

    #[error("Failed to fetch file: {status}")]
    FetchError { status: u16 },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::MissingField { .. } => "MISSING_FIELD",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::DecodeError { .. } => "DECODE_ERROR",
            AppError::BackendError { .. } => "BACKEND_ERROR",
            AppError::FetchError { .. } => "FETCH_ERROR",
            AppError::NetworkError { .. } => "NETWORK_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::MissingField { .. } => StatusCode::BAD_REQUEST,
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::DecodeError { .. } => StatusCode::BAD_REQUEST,
            AppError::BackendError { .. } => StatusCode::BAD_GATEWAY,
            AppError::FetchError { .. } => StatusCode::BAD_GATEWAY,
            AppError::NetworkError { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        // Structured logging with context
        tracing::error!(
            error_code = error_code,
            status_code = %status,
            request_id = %request_id,
            timestamp = %timestamp,
            error_message = %message,
            "API error occurred"
        );

        // Clients only see the message; codes and ids stay in the logs.
        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

// Convert common errors to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

// Helper methods for creating specific errors
impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
