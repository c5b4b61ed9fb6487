//! Session exercise entry model.

use boxlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `session_exercises` table.
///
/// Only the columns of the row's `type` are non-null.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionExercise {
    pub id: DbId,
    pub session_id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub exercise_type: String,
    pub name: String,

    pub rounds: Option<i32>,
    pub round_sec: Option<i32>,
    pub rest_sec: Option<i32>,
    pub focus: Option<String>,

    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_value: Option<f64>,
    pub weight_unit: Option<String>,
    pub weight_kg: Option<f64>,

    pub duration_sec: Option<i32>,

    pub created_at: Timestamp,
}
