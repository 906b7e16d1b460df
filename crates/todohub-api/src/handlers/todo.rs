//! Todo handlers. Every route requires a bearer token.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::CreateTodoRequest;
use crate::dto::response::{MessageResponse, TodoResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /api/todos
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.todo_service.list(auth.context()).await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state
        .todo_service
        .create(auth.context(), req.text.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(todo.into()))
}

/// PUT /api/todos/{id}
///
/// Toggles completion; takes no body.
pub async fn toggle_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state.todo_service.toggle(auth.context(), &id).await?;
    Ok(Json(todo.into()))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.todo_service.delete(auth.context(), &id).await?;
    Ok(Json(MessageResponse {
        message: "Todo deleted".to_string(),
    }))
}
