//! Route definitions for the TodoHub HTTP API.
//!
//! All routes are mounted under `/api`; an unknown `/api` path is a JSON 404.
//! When `server.static_dir` is set the built web client is served for every
//! other path, with `index.html` as the fallback for client-side routes.

use std::path::Path;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::{ServeDir, ServeFile};

use todohub_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(todo_routes())
        .merge(health_routes())
        .fallback(api_not_found);

    let router = Router::new().nest("/api", api_routes);

    let router = match state.config.server.static_dir.as_deref() {
        Some(dir) => {
            tracing::info!(dir, "Serving web client");
            let index = Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router.with_state(state)
}

async fn api_not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Todo CRUD
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{id}",
            put(handlers::todo::toggle_todo).delete(handlers::todo::delete_todo),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
