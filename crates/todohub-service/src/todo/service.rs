//! Todo list operations, scoped to the requesting user.

use std::sync::Arc;

use tracing::info;

use todohub_core::error::AppError;
use todohub_core::types::TodoId;
use todohub_database::store::TodoStore;
use todohub_entity::todo::{CreateTodo, Todo};

use crate::context::RequestContext;

/// Handles listing, creating, toggling, and deleting todos.
///
/// A todo that belongs to someone else is indistinguishable from one that
/// does not exist.
#[derive(Clone)]
pub struct TodoService {
    /// Todo store.
    todos: Arc<dyn TodoStore>,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService").finish_non_exhaustive()
    }
}

impl TodoService {
    /// Creates a new todo service.
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos }
    }

    /// Lists the user's todos, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Todo>, AppError> {
        self.todos.list_for_user(ctx.user_id).await
    }

    /// Adds a todo with trimmed, non-empty text.
    pub async fn create(&self, ctx: &RequestContext, text: &str) -> Result<Todo, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Please enter a todo"));
        }

        let todo = self
            .todos
            .create(CreateTodo {
                user_id: ctx.user_id,
                text: text.to_string(),
            })
            .await?;

        info!(user_id = %ctx.user_id, todo_id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Flips the completion flag of the todo with the given id.
    pub async fn toggle(&self, ctx: &RequestContext, id: &str) -> Result<Todo, AppError> {
        let id = parse_todo_id(id)?;
        self.todos
            .toggle(id, ctx.user_id)
            .await?
            .ok_or_else(todo_not_found)
    }

    /// Deletes the todo with the given id.
    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), AppError> {
        let id = parse_todo_id(id)?;
        if !self.todos.delete(id, ctx.user_id).await? {
            return Err(todo_not_found());
        }

        info!(user_id = %ctx.user_id, todo_id = %id, "Todo deleted");
        Ok(())
    }
}

/// A malformed id cannot name an existing todo.
fn parse_todo_id(raw: &str) -> Result<TodoId, AppError> {
    raw.trim().parse().map_err(|_| todo_not_found())
}

fn todo_not_found() -> AppError {
    AppError::not_found("Todo not found")
}
