//! Handlers for exercise entries, nested under `/sessions/{id}/exercises`
//! and addressed directly at `/session_exercises/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use boxlog_core::error::CoreError;
use boxlog_core::exercise::validate_exercise;
use boxlog_core::types::DbId;
use boxlog_db::models::session_exercise::SessionExercise;
use boxlog_db::repositories::SessionExerciseRepo;

use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::extract::LenientJson;
use crate::response::{CreatedResponse, OkResponse};
use crate::state::AppState;

/// GET /api/sessions/{id}/exercises
///
/// List a session's entries in insertion order. An unknown session simply
/// has no entries.
pub async fn list_exercises(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<Json<Vec<SessionExercise>>> {
    let entries = SessionExerciseRepo::list_for_session(&state.pool, session_id).await?;
    Ok(Json(entries))
}

/// POST /api/sessions/{id}/exercises
///
/// Validate and store one exercise entry. Rejected payloads (unknown type,
/// blank name) return 400 and write nothing; a missing session returns 404.
pub async fn create_exercise(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    LenientJson(payload): LenientJson,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let entry = validate_exercise(&payload)?;

    let id = SessionExerciseRepo::create(&state.pool, session_id, &entry)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::Core(CoreError::NotFound {
                    entity: "Session",
                    id: session_id,
                })
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(
        session_id,
        exercise_id = id,
        exercise_type = entry.exercise_type().as_str(),
        "Exercise entry created",
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// DELETE /api/session_exercises/{id}
///
/// Delete one entry. Succeeds whether or not it existed.
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OkResponse>> {
    let deleted = SessionExerciseRepo::delete(&state.pool, id).await?;
    tracing::info!(exercise_id = id, deleted, "Exercise entry delete requested");
    Ok(Json(OkResponse::ok()))
}
