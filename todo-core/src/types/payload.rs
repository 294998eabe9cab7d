//! Request payloads accepted by the todo operations

use super::TodoStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// Read a string field where JSON `null` means the same as an absent field
fn string_or_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Option::<String>::deserialize(deserializer).map(|value| T::from(value.unwrap_or_default()))
}

fn blank_status() -> TodoStatus {
    TodoStatus::from(String::new())
}

/// Fields a client may supply when creating a todo
///
/// Anything else in the body (`id`, `status`, timestamps) is ignored; the server assigns
/// those itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Body of a status update
///
/// A missing or `null` status decodes as the empty string, which is stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    #[serde(default = "blank_status", deserialize_with = "string_or_empty")]
    pub status: TodoStatus,
}

impl Default for StatusUpdate {
    fn default() -> Self {
        Self {
            status: blank_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_ignores_server_fields() {
        let payload: NewTodo = serde_json::from_str(
            r#"{"id":"abc","title":"A","description":"B","status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(payload, NewTodo::new("A", "B"));
    }

    #[test]
    fn test_new_todo_missing_fields_default_to_empty() {
        let payload: NewTodo = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_empty());
        assert!(payload.description.is_empty());
    }

    #[test]
    fn test_new_todo_rejects_mistyped_title() {
        assert!(serde_json::from_str::<NewTodo>(r#"{"title":7}"#).is_err());
    }

    #[test]
    fn test_new_todo_null_fields_default_to_empty() {
        let payload: NewTodo =
            serde_json::from_str(r#"{"title":null,"description":null}"#).unwrap();
        assert_eq!(payload, NewTodo::default());
    }

    #[test]
    fn test_status_update_missing_or_null_status_is_blank() {
        let missing: StatusUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.status, TodoStatus::Other(String::new()));

        let null: StatusUpdate = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert_eq!(null, StatusUpdate::default());

        let update: StatusUpdate = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(update.status, TodoStatus::Completed);
    }

    #[test]
    fn test_status_update_rejects_non_string_status() {
        assert!(serde_json::from_str::<StatusUpdate>(r#"{"status":3}"#).is_err());
    }
}
