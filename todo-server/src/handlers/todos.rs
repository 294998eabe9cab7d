//! Todo handlers
//!
//! Each handler decodes its body, touches the store once, and encodes the result.

use crate::codec::{decode_json, encode_json};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use todo_core::{NewTodo, StatusUpdate, Todo};

/// Create a todo
///
/// Client-supplied `id`, `status` and timestamps are discarded.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: NewTodo = decode_json(&body)?;

    let todo = Todo::new(payload, Utc::now());
    state.store.append(todo.clone()).await;
    tracing::info!(id = %todo.id, title = %todo.title, "Todo created");

    encode_json(StatusCode::CREATED, &todo)
}

/// List all todos in creation order
pub async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    let todos = state.store.list_all().await;
    encode_json(StatusCode::OK, &todos)
}

/// Update a todo's status
pub async fn update_todo_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let update: StatusUpdate = decode_json(&body)?;

    let todo = state
        .store
        .update_status_by_id(&id, update.status, Utc::now())
        .await?;
    tracing::info!(id = %todo.id, status = %todo.status, "Todo status changed");

    encode_json(StatusCode::OK, &todo)
}
