//! Response DTOs.

use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};
use todohub_core::types::{TodoId, UserId};
use todohub_entity::todo::Todo;
use todohub_entity::user::User;

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token.
    pub token: String,
    /// When the token stops being accepted.
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: UserResponse,
}

/// A todo in the shape the web client expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    /// Todo ID.
    #[serde(rename = "_id")]
    pub id: TodoId,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Owner.
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text,
            completed: todo.completed,
            timestamp: todo.created_at,
            user_id: todo.user_id,
        }
    }
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}
