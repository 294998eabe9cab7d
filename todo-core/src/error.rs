//! Error types for Todo Core

use thiserror::Error;

/// Result type alias using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors raised by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(String),
}
