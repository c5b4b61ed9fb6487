pub mod health;
pub mod session_exercises;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  service + database liveness
///
/// /sessions                                list, create
/// /sessions/{id}                           delete (cascades to exercises)
/// /sessions/{id}/exercises                 list, create
///
/// /session_exercises/{id}                  delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/sessions", sessions::router())
        .nest("/session_exercises", session_exercises::router())
}
