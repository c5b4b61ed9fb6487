//! Training session model.

use boxlog_core::temporal::{StoredDate, StoredTime};
use boxlog_core::types::DbId;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::Serialize;
use sqlx::postgres::types::PgInterval;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::wire;

/// A row from the `sessions` table.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: DbId,
    #[serde(serialize_with = "wire::date")]
    pub date: StoredDate,
    #[serde(serialize_with = "wire::time")]
    pub start_time: Option<StoredTime>,
    pub mode: String,
    pub intensity: String,
    pub duration_min: Option<i32>,
    pub notes: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for Session {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let date: NaiveDate = row.try_get("date")?;
        Ok(Self {
            id: row.try_get("id")?,
            date: StoredDate::Date(date),
            start_time: stored_time(row, "start_time")?,
            mode: row.try_get("mode")?,
            intensity: row.try_get("intensity")?,
            duration_min: row.try_get("duration_min")?,
            notes: row.try_get("notes")?,
        })
    }
}

/// Read a time-of-day column that may come back either as a wall-clock
/// `TIME` or as an `INTERVAL` since midnight.
fn stored_time(row: &PgRow, column: &str) -> Result<Option<StoredTime>, sqlx::Error> {
    match row.try_get::<Option<NaiveTime>, _>(column) {
        Ok(t) => Ok(t.map(StoredTime::Clock)),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let interval: Option<PgInterval> = row.try_get(column)?;
            Ok(interval.map(|iv| StoredTime::Elapsed(interval_to_delta(&iv))))
        }
        Err(e) => Err(e),
    }
}

/// Month components are ignored; an interval since midnight never has any.
fn interval_to_delta(iv: &PgInterval) -> TimeDelta {
    TimeDelta::days(i64::from(iv.days)) + TimeDelta::microseconds(iv.microseconds)
}
