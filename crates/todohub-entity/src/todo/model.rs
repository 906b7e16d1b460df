//! Todo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use todohub_core::types::{TodoId, UserId};

/// A single task owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Unique todo identifier.
    pub id: TodoId,
    /// Owning user.
    pub user_id: UserId,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation time; lists are ordered by this, newest first.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Whether `user_id` owns this todo.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a new todo.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// Owning user.
    pub user_id: UserId,
    /// Task text, already trimmed.
    pub text: String,
}

impl CreateTodo {
    /// Build the row that will be persisted. New todos start incomplete.
    pub fn into_todo(self) -> Todo {
        Todo {
            id: TodoId::new(),
            user_id: self.user_id,
            text: self.text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}
