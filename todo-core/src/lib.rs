//! Todo Core Library
//!
//! Domain types for the todo service and the store that owns every todo for the
//! lifetime of the process. The HTTP layer lives in `todo-server`.

pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, TodoError};
pub use store::{MemoryTodoStore, TodoStore};
pub use types::{NewTodo, StatusUpdate, Todo, TodoStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(NewTodo::new("Test Todo", "details"), chrono::Utc::now());
        assert_eq!(todo.title, "Test Todo");
        assert_eq!(todo.status, TodoStatus::Pending);
    }
}
