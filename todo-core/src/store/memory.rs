//! In-process todo store

use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::types::{Todo, TodoStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Todo store held in process memory for the lifetime of the instance
///
/// A single lock guards the sequence; each operation holds it only for its own duration.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn append(&self, todo: Todo) {
        self.todos.write().await.push(todo);
    }

    async fn list_all(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn update_status_by_id(
        &self,
        id: &str,
        status: TodoStatus,
        now: DateTime<Utc>,
    ) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;

        todo.apply_status(status, now);
        tracing::debug!(id = %todo.id, status = %todo.status, "Todo status updated");
        Ok(todo.clone())
    }

    async fn len(&self) -> usize {
        self.todos.read().await.len()
    }
}
