//! Todo status values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a todo
///
/// Serialized as a bare JSON string. The update path accepts any string, so values other
/// than `pending` and `completed` are kept verbatim in [`TodoStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TodoStatus {
    /// Not yet done. Every todo starts here.
    #[default]
    Pending,

    /// Done. Setting this stamps `completed_at`.
    Completed,

    /// Any other client-supplied value
    Other(String),
}

impl TodoStatus {
    /// The wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(value) => value,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<String> for TodoStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TodoStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TodoStatus> for String {
    fn from(status: TodoStatus) -> Self {
        match status {
            TodoStatus::Other(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
