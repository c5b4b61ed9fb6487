//! Repository for the `session_exercises` table.

use boxlog_core::exercise::NewExercise;
use boxlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::session_exercise::SessionExercise;

/// Column list for session_exercises queries.
const COLUMNS: &str = "id, session_id, type, name, \
    rounds, round_sec, rest_sec, focus, \
    sets, reps, weight_value, weight_unit, weight_kg, \
    duration_sec, created_at";

/// Provides create/list/delete for exercise entries.
pub struct SessionExerciseRepo;

impl SessionExerciseRepo {
    /// List the entries of one session in insertion order.
    pub async fn list_for_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<SessionExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_exercises WHERE session_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, SessionExercise>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a validated entry under `session_id`, returning its new ID.
    ///
    /// Every variant column is bound, so columns outside the entry's type
    /// are written as explicit NULLs. Fails with a foreign-key violation if
    /// the session does not exist.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        input: &NewExercise,
    ) -> Result<DbId, sqlx::Error> {
        let cols = input.details.columns();
        sqlx::query_scalar(
            "INSERT INTO session_exercises (
                session_id, type, name,
                rounds, round_sec, rest_sec, focus,
                sets, reps, weight_value, weight_unit, weight_kg,
                duration_sec
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING id",
        )
        .bind(session_id)
        .bind(input.exercise_type().as_str())
        .bind(&input.name)
        .bind(cols.rounds)
        .bind(cols.round_sec)
        .bind(cols.rest_sec)
        .bind(&cols.focus)
        .bind(cols.sets)
        .bind(cols.reps)
        .bind(cols.weight_value)
        .bind(&cols.weight_unit)
        .bind(cols.weight_kg)
        .bind(cols.duration_sec)
        .fetch_one(pool)
        .await
    }

    /// Delete an entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM session_exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
