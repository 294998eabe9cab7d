//! Store abstraction for todo records
//!
//! The store exclusively owns every todo. Callers get clones back, never references into
//! the underlying sequence.

mod memory;

pub use memory::MemoryTodoStore;

use crate::error::Result;
use crate::types::{Todo, TodoStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Abstract todo store
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Append a todo to the end of the sequence
    ///
    /// The caller guarantees a fresh identifier; no uniqueness check is made.
    async fn append(&self, todo: Todo);

    /// Snapshot of every todo in insertion order
    async fn list_all(&self) -> Vec<Todo>;

    /// Update the status of the first todo whose id matches
    ///
    /// Returns the updated record, or `TodoError::NotFound` leaving the store untouched.
    async fn update_status_by_id(
        &self,
        id: &str,
        status: TodoStatus,
        now: DateTime<Utc>,
    ) -> Result<Todo>;

    /// Number of todos held
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
