//! Date/time codec for the wire and storage boundaries.
//!
//! Inbound, wire strings are decoded into chrono values (`decode_*`).
//! Outbound, whatever the storage driver handed back is encoded into the
//! canonical wire strings `YYYY-MM-DD` and `HH:MM:SS` (`encode_*`).
//!
//! Every function here is total: malformed input yields `None` on the way
//! in and a best-effort string on the way out.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A date value as returned by the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Anything the driver could not type; emitted verbatim.
    Text(String),
}

/// A time-of-day value as returned by the storage layer.
///
/// Some drivers hand TIME columns back as the elapsed duration since
/// midnight rather than as a wall-clock value, hence [`StoredTime::Elapsed`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoredTime {
    Clock(NaiveTime),
    DateTime(NaiveDateTime),
    Elapsed(TimeDelta),
    /// Anything the driver could not type; emitted verbatim.
    Text(String),
}

/// Decode a strict `YYYY-MM-DD` string.
///
/// Returns `None` for absent input, for any other shape, and for strings
/// that have the right shape but name an impossible date (`2024-02-30`).
/// For accepted input, formatting the result with [`DATE_FORMAT`] gives
/// back the original string.
pub fn decode_date(input: Option<&str>) -> Option<NaiveDate> {
    let s = input?;
    if !is_strict_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Decode `HH:MM` or `HH:MM:SS` into a time of day.
///
/// Hour, minute and second components are one or two ASCII digits each.
/// Out-of-range components make the whole value absent.
pub fn decode_time(input: Option<&str>) -> Option<NaiveTime> {
    let s = input?;
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let mut fields = [0u32; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    NaiveTime::from_hms_opt(fields[0], fields[1], fields[2])
}

/// Encode a stored date as `YYYY-MM-DD`.
///
/// Date-times contribute their date portion only; untyped text passes
/// through unchanged.
pub fn encode_date(stored: Option<&StoredDate>) -> Option<String> {
    let value = match stored? {
        StoredDate::Date(d) => d.format(DATE_FORMAT).to_string(),
        StoredDate::DateTime(dt) => dt.date().format(DATE_FORMAT).to_string(),
        StoredDate::Text(s) => s.clone(),
    };
    Some(value)
}

/// Encode a stored time as `HH:MM:SS`.
///
/// Elapsed durations are reinterpreted as time since midnight. Negative
/// durations clamp to `00:00:00`; durations of a day or more keep counting
/// hours past 23.
pub fn encode_time(stored: Option<&StoredTime>) -> Option<String> {
    let value = match stored? {
        StoredTime::Clock(t) => format_clock(*t),
        StoredTime::DateTime(dt) => format_clock(dt.time()),
        StoredTime::Elapsed(delta) => format_elapsed(*delta),
        StoredTime::Text(s) => s.clone(),
    };
    Some(value)
}

fn format_clock(t: NaiveTime) -> String {
    // Drop sub-second precision so the output is always exactly HH:MM:SS.
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

fn format_elapsed(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn is_strict_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
