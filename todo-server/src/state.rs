//! Application state

use std::sync::Arc;
use todo_core::{MemoryTodoStore, TodoStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Store holding every todo for the lifetime of the process
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryTodoStore::new()))
    }

    /// Create application state around an existing store
    pub fn with_store(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
