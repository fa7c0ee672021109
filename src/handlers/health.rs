use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::time::SystemTime;
use tracing::info;

use crate::error::AppResult;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    info!("Health check requested");

    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let response = json!({
        "status": "healthy",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "backend_url": state.config.backend_url,
        "max_file_size_mb": state.config.max_file_size_mb,
    });

    Ok(Json(response))
}

/// Readiness check endpoint
pub async fn ready_handler() -> StatusCode {
    StatusCode::OK
}
