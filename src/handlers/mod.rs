pub mod download;
pub mod health;
pub mod process;

pub use download::*;
pub use health::*;
pub use process::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Builds the relay router. `main` adds the tracing/CORS/body-limit layers
/// on top; tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/process-word-file", post(process_word_file_handler))
        .route(
            "/api/download-processed-file",
            post(download_by_payload_handler).get(download_by_reference_handler),
        )
        .with_state(state)
}
