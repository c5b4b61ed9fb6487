//! Training session payload normalization.

use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};

use crate::normalize::{clamp_int, normalize_tag, normalize_text};
use crate::temporal::{decode_date, decode_time};

pub const DEFAULT_MODE: &str = "boxing";
pub const DEFAULT_INTENSITY: &str = "medium";

/// Upper bound for `duration_min`.
pub const MAX_DURATION_MIN: i64 = 1_000_000_000;

/// A normalized session, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub mode: String,
    pub intensity: String,
    pub duration_min: Option<i32>,
    pub notes: Option<String>,
}

/// Normalize a session payload. Never fails.
///
/// A missing or malformed `date` falls back to `today`.
pub fn normalize_session(payload: &Map<String, Value>, today: NaiveDate) -> NewSession {
    let date = decode_date(payload.get("date").and_then(Value::as_str)).unwrap_or(today);
    let start_time = decode_time(payload.get("start_time").and_then(Value::as_str));

    let duration_min = payload
        .get("duration_min")
        .filter(|v| !v.is_null())
        // Bounded by MAX_DURATION_MIN, which fits in i32.
        .map(|v| clamp_int(Some(v), 0, 0, MAX_DURATION_MIN) as i32);

    NewSession {
        date,
        start_time,
        mode: normalize_tag(payload.get("mode"), DEFAULT_MODE),
        intensity: normalize_tag(payload.get("intensity"), DEFAULT_INTENSITY),
        duration_min,
        notes: normalize_text(payload.get("notes")),
    }
}
