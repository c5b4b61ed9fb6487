//! Repository for the `sessions` table.

use boxlog_core::session::NewSession;
use boxlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::Session;

/// Column list for sessions queries.
const COLUMNS: &str = "id, date, start_time, mode, intensity, duration_min, notes";

/// Provides create/list/delete for training sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// List all sessions, newest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions ORDER BY id DESC");
        sqlx::query_as::<_, Session>(&query).fetch_all(pool).await
    }


    /// Insert a normalized session, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (date, start_time, mode, intensity, duration_min, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.date)
            .bind(input.start_time)
            .bind(&input.mode)
            .bind(&input.intensity)
            .bind(input.duration_min)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Delete a session and, by cascade, its exercise entries.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
