//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Always 200; a failing database only downgrades `status`.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = match state.database.health_check().await {
        Ok(up) => up,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database: if database_up { "connected" } else { "unavailable" }.to_string(),
    })
}
