//! Core types for todo records and their request payloads

mod payload;
mod status;
mod todo;

pub use payload::{NewTodo, StatusUpdate};
pub use status::TodoStatus;
pub use todo::Todo;
