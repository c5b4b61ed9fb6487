//! Handlers for the `/sessions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use boxlog_core::session::normalize_session;
use boxlog_core::types::DbId;
use boxlog_db::models::session::Session;
use boxlog_db::repositories::SessionRepo;
use chrono::Utc;

use crate::error::AppResult;
use crate::extract::LenientJson;
use crate::response::OkResponse;
use crate::state::AppState;

/// GET /api/sessions
///
/// List all sessions, newest first.
pub async fn list_sessions(State(state): State<AppState>) -> AppResult<Json<Vec<Session>>> {
    let sessions = SessionRepo::list(&state.pool).await?;
    Ok(Json(sessions))
}

/// POST /api/sessions
///
/// Create a session from a loosely-typed payload. Malformed fields fall
/// back to defaults; `date` defaults to today (UTC).
pub async fn create_session(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson,
) -> AppResult<(StatusCode, Json<Session>)> {
    let input = normalize_session(&payload, Utc::now().date_naive());
    let session = SessionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        session_id = session.id,
        mode = %input.mode,
        intensity = %input.intensity,
        "Session created",
    );

    Ok((StatusCode::CREATED, Json(session)))
}

/// DELETE /api/sessions/{id}
///
/// Delete a session and its exercise entries. Succeeds whether or not the
/// session existed.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OkResponse>> {
    let deleted = SessionRepo::delete(&state.pool, id).await?;
    tracing::info!(session_id = id, deleted, "Session delete requested");
    Ok(Json(OkResponse::ok()))
}
