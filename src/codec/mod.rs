//! Transport codec: binary payloads <-> text-safe strings.
//!
//! Processed documents travel inside JSON response bodies, so the raw bytes
//! are carried as standard base64 with padding. `decode(encode(b)) == b` for
//! arbitrary binary input; malformed text is rejected outright rather than
//! decoded into partial garbage.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{AppError, AppResult};

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> AppResult<Vec<u8>> {
    STANDARD.decode(text).map_err(|e| AppError::DecodeError {
        message: format!("Invalid base64 payload: {}", e),
    })
}
