use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status; always `ok` when the process answers.
    pub status: &'static str,
    /// `ok` if the liveness probe succeeded, otherwise `unknown`.
    pub db: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /api/health -- never fails; a broken database only shows in `db`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match boxlog_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Database liveness probe failed");
            "unknown"
        }
    };

    Json(HealthResponse {
        status: "ok",
        db,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
