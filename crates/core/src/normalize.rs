//! Fail-soft coercion of loosely-typed payload fields.
//!
//! Request payloads arrive as untyped JSON. None of these helpers ever
//! reject input: a malformed value falls back to the caller's default or to
//! `None`, so one bad optional field never blocks creating a record.

use std::num::IntErrorKind;

use serde_json::Value;

/// Coerce `raw` to an integer and clamp it into `[min, max]`.
///
/// Returns `default` unchanged (not clamped) when `raw` is absent or cannot
/// be read as an integer.
pub fn clamp_int(raw: Option<&Value>, default: i64, min: i64, max: i64) -> i64 {
    match raw.and_then(coerce_int) {
        Some(n) => n.clamp(min, max),
        None => default,
    }
}

/// Coerce `raw` to a finite float.
///
/// `null`, the empty string and anything unparseable are all `None`.
pub fn clamp_float(raw: Option<&Value>) -> Option<f64> {
    let n = match raw? {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Trim a free-text field. Blank text is `None`, never `""`.
///
/// Numbers and booleans are stringified first; arrays and objects are
/// treated as absent.
pub fn normalize_text(raw: Option<&Value>) -> Option<String> {
    let text = match raw? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Trim and lowercase a tag field, falling back to `default` when the value
/// is absent, not a string, or blank.
pub fn normalize_tag(raw: Option<&Value>, default: &str) -> String {
    raw.and_then(Value::as_str)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read a JSON value as an integer.
///
/// Floats truncate toward zero and out-of-range magnitudes saturate, so the
/// subsequent clamp still sees the right side of the range.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
        },
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Some(i),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -- clamp_int --

    #[test]
    fn clamp_int_unparseable_returns_default() {
        assert_eq!(clamp_int(Some(&json!("abc")), 5, 0, 10), 5);
        assert_eq!(clamp_int(Some(&json!("12.5")), 5, 0, 10), 5);
        assert_eq!(clamp_int(Some(&json!([1])), 5, 0, 10), 5);
        assert_eq!(clamp_int(Some(&Value::Null), 5, 0, 10), 5);
        assert_eq!(clamp_int(None, 5, 0, 10), 5);
    }

    #[test]
    fn clamp_int_default_is_not_clamped() {
        assert_eq!(clamp_int(None, 50, 0, 10), 50);
    }

    #[test]
    fn clamp_int_clamps_into_range() {
        assert_eq!(clamp_int(Some(&json!(15)), 5, 0, 10), 10);
        assert_eq!(clamp_int(Some(&json!(-3)), 5, 0, 10), 0);
        assert_eq!(clamp_int(Some(&json!(7)), 5, 0, 10), 7);
    }

    #[test]
    fn clamp_int_accepts_numeric_strings() {
        assert_eq!(clamp_int(Some(&json!("8")), 5, 0, 10), 8);
        assert_eq!(clamp_int(Some(&json!(" 9 ")), 5, 0, 10), 9);
        assert_eq!(clamp_int(Some(&json!("+3")), 5, 0, 10), 3);
        assert_eq!(clamp_int(Some(&json!("-4")), 5, -10, 10), -4);
    }

    #[test]
    fn clamp_int_truncates_floats() {
        assert_eq!(clamp_int(Some(&json!(7.9)), 5, 0, 10), 7);
        assert_eq!(clamp_int(Some(&json!(-0.5)), 5, -10, 10), 0);
    }

    #[test]
    fn clamp_int_reads_booleans() {
        assert_eq!(clamp_int(Some(&json!(true)), 5, 0, 10), 1);
        assert_eq!(clamp_int(Some(&json!(false)), 5, 0, 10), 0);
    }

    #[test]
    fn clamp_int_saturates_huge_values() {
        assert_eq!(clamp_int(Some(&json!("99999999999999999999999")), 5, 0, 10), 10);
        assert_eq!(clamp_int(Some(&json!(1e300)), 5, 0, 10), 10);
        assert_eq!(clamp_int(Some(&json!("-99999999999999999999999")), 5, 0, 10), 0);
    }

    // -- clamp_float --

    #[test]
    fn clamp_float_absent_and_empty() {
        assert_eq!(clamp_float(None), None);
        assert_eq!(clamp_float(Some(&Value::Null)), None);
        assert_eq!(clamp_float(Some(&json!(""))), None);
    }

    #[test]
    fn clamp_float_parses_numbers_and_strings() {
        assert_eq!(clamp_float(Some(&json!(150))), Some(150.0));
        assert_eq!(clamp_float(Some(&json!(62.5))), Some(62.5));
        assert_eq!(clamp_float(Some(&json!("42.25"))), Some(42.25));
        assert_eq!(clamp_float(Some(&json!(" 10 "))), Some(10.0));
    }

    #[test]
    fn clamp_float_unparseable_is_absent() {
        assert_eq!(clamp_float(Some(&json!("heavy"))), None);
        assert_eq!(clamp_float(Some(&json!("inf"))), None);
        assert_eq!(clamp_float(Some(&json!("NaN"))), None);
        assert_eq!(clamp_float(Some(&json!({"kg": 3}))), None);
    }

    // -- normalize_text --

    #[test]
    fn normalize_text_trims() {
        assert_eq!(
            normalize_text(Some(&json!("  felt sharp  "))).as_deref(),
            Some("felt sharp")
        );
    }

    #[test]
    fn normalize_text_blank_is_absent() {
        assert_eq!(normalize_text(Some(&json!(""))), None);
        assert_eq!(normalize_text(Some(&json!("   \n"))), None);
        assert_eq!(normalize_text(Some(&Value::Null)), None);
        assert_eq!(normalize_text(None), None);
    }

    #[test]
    fn normalize_text_stringifies_scalars() {
        assert_eq!(normalize_text(Some(&json!(12))).as_deref(), Some("12"));
        assert_eq!(normalize_text(Some(&json!(true))).as_deref(), Some("true"));
    }

    // -- normalize_tag --

    #[test]
    fn normalize_tag_lowercases() {
        assert_eq!(normalize_tag(Some(&json!(" HIGH ")), "medium"), "high");
    }

    #[test]
    fn normalize_tag_defaults() {
        assert_eq!(normalize_tag(None, "medium"), "medium");
        assert_eq!(normalize_tag(Some(&json!("")), "medium"), "medium");
        assert_eq!(normalize_tag(Some(&json!("  ")), "medium"), "medium");
        assert_eq!(normalize_tag(Some(&json!(3)), "medium"), "medium");
    }
}
