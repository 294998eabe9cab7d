//! Handler error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::TodoError;

/// Errors a handler can answer a request with
///
/// Responses carry the plain-text message as the body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to decode request body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::NotFound(id) => {
                tracing::debug!(id = %id, "Todo not found");
                ApiError::NotFound
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
