//! Request handlers

mod todos;

pub use todos::*;

use axum::http::StatusCode;

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
