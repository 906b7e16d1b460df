//! Application builder: wires stores, auth, and services into state, and
//! state into the router.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use todohub_auth::credentials::CredentialStore;
use todohub_auth::jwt::{JwtDecoder, JwtEncoder};
use todohub_auth::password::{PasswordHasher, PasswordValidator};
use todohub_core::config::AppConfig;
use todohub_core::result::AppResult;
use todohub_database::Database;
use todohub_service::{AuthService, TodoService};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds application state over an opened database.
///
/// Fails when the auth configuration cannot produce a token signer.
pub fn build_state(config: AppConfig, database: Database) -> AppResult<AppState> {
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);

    let credentials = Arc::new(CredentialStore::new(
        database.users(),
        PasswordHasher::new(),
        PasswordValidator::new(&config.auth),
    )?);

    let auth_service = Arc::new(AuthService::new(
        credentials,
        jwt_encoder,
        database.users(),
    ));
    let todo_service = Arc::new(TodoService::new(database.todos()));

    Ok(AppState {
        config: Arc::new(config),
        database,
        jwt_decoder,
        auth_service,
        todo_service,
        started_at: Instant::now(),
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}
