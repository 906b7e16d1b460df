//! Storage traits implemented by every backend.
//!
//! Handlers and services only ever see `Arc<dyn UserStore>` and
//! `Arc<dyn TodoStore>`, so the PostgreSQL and in-memory backends are
//! interchangeable.

use async_trait::async_trait;

use todohub_core::result::AppResult;
use todohub_core::types::{TodoId, UserId};
use todohub_entity::todo::{CreateTodo, Todo};
use todohub_entity::user::{CreateUser, User};

/// Persistence for registered principals.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: CreateUser) -> AppResult<User>;
}

/// Persistence for todo items. Every lookup is scoped to the owner.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All todos of `user_id`, newest first.
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Todo>>;

    /// Insert a new todo.
    async fn create(&self, data: CreateTodo) -> AppResult<Todo>;

    /// Flip the completion flag and return the updated row, or `None` when
    /// no todo with that id belongs to `user_id`.
    async fn toggle(&self, id: TodoId, user_id: UserId) -> AppResult<Option<Todo>>;

    /// Delete a todo. Returns `false` when nothing matched.
    async fn delete(&self, id: TodoId, user_id: UserId) -> AppResult<bool>;
}
