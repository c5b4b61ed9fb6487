//! Route definitions for the `/session_exercises` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::session_exercises;
use crate::state::AppState;

/// Routes mounted at `/session_exercises`.
///
/// ```text
/// DELETE /{id}    -> delete_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(session_exercises::delete_exercise))
}
