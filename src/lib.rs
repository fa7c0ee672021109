//! Docflow Word Document Relay Service
//!
//! Relays Word documents to an external processing backend and hands the
//! transformed results back for download, plus the client-side batch
//! orchestrator that drives per-file submissions.

pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
