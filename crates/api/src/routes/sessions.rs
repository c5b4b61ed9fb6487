//! Route definitions for the `/sessions` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{session_exercises, sessions};
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /                  -> list_sessions
/// POST   /                  -> create_session
/// DELETE /{id}              -> delete_session
/// GET    /{id}/exercises    -> list_exercises
/// POST   /{id}/exercises    -> create_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route("/{id}", delete(sessions::delete_session))
        .route(
            "/{id}/exercises",
            get(session_exercises::list_exercises).post(session_exercises::create_exercise),
        )
}
