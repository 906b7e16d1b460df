//! Shared application state passed to every handler.

use std::sync::Arc;
use std::time::Instant;

use todohub_auth::jwt::JwtDecoder;
use todohub_core::config::AppConfig;
use todohub_database::Database;
use todohub_service::{AuthService, TodoService};

/// Shared application state, cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend handle.
    pub database: Database,
    /// JWT decoder used by the `AuthUser` extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// Todo operations.
    pub todo_service: Arc<TodoService>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}
