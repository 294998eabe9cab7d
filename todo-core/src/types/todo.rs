//! The todo record

use super::{NewTodo, TodoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task tracked by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Server-assigned identifier, immutable after creation
    pub id: String,

    pub title: String,

    pub description: String,

    pub status: TodoStatus,

    pub created_at: DateTime<Utc>,

    /// Equal to `created_at` until the first status update
    pub updated_at: DateTime<Utc>,

    /// Set the first time the todo is completed and never cleared afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create a pending todo with a fresh identifier
    pub fn new(payload: NewTodo, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            status: TodoStatus::Pending,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Move the todo to `status`, stamping `updated_at` and, for completion, `completed_at`
    pub fn apply_status(&mut self, status: TodoStatus, now: DateTime<Utc>) {
        if status.is_completed() {
            self.completed_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_todo_is_pending() {
        let now = Utc::now();
        let todo = Todo::new(NewTodo::new("A", "B"), now);

        assert!(!todo.id.is_empty());
        assert_eq!(todo.status, TodoStatus::Pending);
        assert_eq!(todo.created_at, todo.updated_at);
        assert!(todo.completed_at.is_none());
    }

    #[test]
    fn test_complete_stamps_completed_at() {
        let created = Utc::now();
        let mut todo = Todo::new(NewTodo::new("A", "B"), created);

        let later = created + Duration::seconds(5);
        todo.apply_status(TodoStatus::Completed, later);

        assert_eq!(todo.status, TodoStatus::Completed);
        assert_eq!(todo.updated_at, later);
        assert_eq!(todo.completed_at, Some(later));
        assert_eq!(todo.created_at, created);
    }

    #[test]
    fn test_revert_to_pending_keeps_completed_at() {
        let created = Utc::now();
        let mut todo = Todo::new(NewTodo::new("A", "B"), created);

        let done = created + Duration::seconds(1);
        todo.apply_status(TodoStatus::Completed, done);
        let reopened = created + Duration::seconds(2);
        todo.apply_status(TodoStatus::Pending, reopened);

        assert_eq!(todo.status, TodoStatus::Pending);
        assert_eq!(todo.updated_at, reopened);
        assert_eq!(todo.completed_at, Some(done));
    }

    #[test]
    fn test_serialization_omits_missing_completed_at() {
        let todo = Todo::new(NewTodo::new("A", "B"), Utc::now());
        let json: serde_json::Value = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["status"], "pending");
        assert!(json.get("completed_at").is_none());
        assert!(json["created_at"].is_string());
    }
}
