//! Todo repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_core::types::{TodoId, UserId};
use todohub_entity::todo::{CreateTodo, Todo};

use crate::store::TodoStore;

/// PostgreSQL-backed [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    /// Create a new todo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for TodoRepository {
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            "SELECT * FROM todos WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    async fn create(&self, data: CreateTodo) -> AppResult<Todo> {
        let todo = data.into_todo();

        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (id, user_id, text, completed, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(todo.id)
        .bind(todo.user_id)
        .bind(&todo.text)
        .bind(todo.completed)
        .bind(todo.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    async fn toggle(&self, id: TodoId, user_id: UserId) -> AppResult<Option<Todo>> {
        // Single statement, so concurrent toggles never lose an update.
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET completed = NOT completed \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle todo", e))
    }

    async fn delete(&self, id: TodoId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;

        Ok(result.rows_affected() > 0)
    }
}
