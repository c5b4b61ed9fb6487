//! Exercise entry variants and their validation.
//!
//! An exercise payload is a loose JSON object tagged by `type`. Validation
//! turns it into a closed [`ExerciseDetails`] variant carrying only that
//! variant's fields. Identity fields (`type`, `name`) are hard requirements;
//! every other field is clamped or defaulted via [`crate::normalize`].
//!
//! Storage keeps all variants in one sparse table, so [`ExerciseColumns`]
//! flattens a variant back into nullable columns for the repository.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::normalize::{clamp_float, clamp_int, normalize_tag};
use crate::units::{to_kg, WeightUnit};

/// Rejection message for an absent, blank or unsupported `type`.
pub const UNKNOWN_TYPE: &str = "unknown type";

/// Rejection message for a blank or missing `name`.
pub const IDENTITY_REQUIRED: &str = "type and name are required";

/// Default `focus` for boxing rounds.
pub const DEFAULT_FOCUS: &str = "technique";

/// The closed set of exercise kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseType {
    BoxingRounds,
    Strength,
    Timed,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 3] = [Self::BoxingRounds, Self::Strength, Self::Timed];

    /// Parse a type tag, case- and whitespace-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// The tag stored in the `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BoxingRounds => "boxing_rounds",
            Self::Strength => "strength",
            Self::Timed => "timed",
        }
    }
}

/// An integer payload field with its default and inclusive bounds.
#[derive(Debug, Clone, Copy)]
pub struct IntField {
    pub key: &'static str,
    pub default: i32,
    pub min: i32,
    pub max: i32,
}

impl IntField {
    fn read(self, payload: &Map<String, Value>) -> i32 {
        let n = clamp_int(
            payload.get(self.key),
            i64::from(self.default),
            i64::from(self.min),
            i64::from(self.max),
        );
        // Either the default or clamped into [min, max]; both fit in i32.
        n as i32
    }
}

pub const ROUNDS: IntField = IntField { key: "rounds", default: 6, min: 1, max: 999 };
pub const ROUND_SEC: IntField = IntField { key: "round_sec", default: 180, min: 10, max: 3600 };
pub const BOXING_REST_SEC: IntField = IntField { key: "rest_sec", default: 60, min: 0, max: 3600 };
pub const SETS: IntField = IntField { key: "sets", default: 4, min: 1, max: 999 };
pub const REPS: IntField = IntField { key: "reps", default: 8, min: 1, max: 999 };
pub const STRENGTH_REST_SEC: IntField = IntField { key: "rest_sec", default: 90, min: 0, max: 3600 };
pub const DURATION_SEC: IntField = IntField { key: "duration_sec", default: 600, min: 10, max: 86_400 };

/// A weight as entered, plus the unit it was entered in (if recognised).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: Option<WeightUnit>,
}

impl Weight {
    /// Canonical weight in kilograms; `None` when the unit is unknown.
    pub fn kg(&self) -> Option<f64> {
        to_kg(self.value, self.unit)
    }
}

/// Variant-specific fields of an exercise entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseDetails {
    BoxingRounds {
        rounds: i32,
        round_sec: i32,
        rest_sec: i32,
        focus: String,
    },
    Strength {
        sets: i32,
        reps: i32,
        rest_sec: i32,
        weight: Option<Weight>,
    },
    Timed {
        duration_sec: i32,
    },
}

impl ExerciseDetails {
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::BoxingRounds { .. } => ExerciseType::BoxingRounds,
            Self::Strength { .. } => ExerciseType::Strength,
            Self::Timed { .. } => ExerciseType::Timed,
        }
    }

    /// Normalize the fields of `exercise_type` out of a raw payload.
    pub fn from_payload(exercise_type: ExerciseType, payload: &Map<String, Value>) -> Self {
        match exercise_type {
            ExerciseType::BoxingRounds => Self::BoxingRounds {
                rounds: ROUNDS.read(payload),
                round_sec: ROUND_SEC.read(payload),
                rest_sec: BOXING_REST_SEC.read(payload),
                focus: normalize_tag(payload.get("focus"), DEFAULT_FOCUS),
            },
            ExerciseType::Strength => Self::Strength {
                sets: SETS.read(payload),
                reps: REPS.read(payload),
                rest_sec: STRENGTH_REST_SEC.read(payload),
                weight: read_weight(payload),
            },
            ExerciseType::Timed => Self::Timed {
                duration_sec: DURATION_SEC.read(payload),
            },
        }
    }

    /// Flatten into the sparse per-variant column set.
    pub fn columns(&self) -> ExerciseColumns {
        let mut cols = ExerciseColumns::default();
        match self {
            Self::BoxingRounds {
                rounds,
                round_sec,
                rest_sec,
                focus,
            } => {
                cols.rounds = Some(*rounds);
                cols.round_sec = Some(*round_sec);
                cols.rest_sec = Some(*rest_sec);
                cols.focus = Some(focus.clone());
            }
            Self::Strength {
                sets,
                reps,
                rest_sec,
                weight,
            } => {
                cols.sets = Some(*sets);
                cols.reps = Some(*reps);
                cols.rest_sec = Some(*rest_sec);
                if let Some(w) = weight {
                    cols.weight_value = Some(w.value);
                    cols.weight_unit = w.unit.map(|u| u.as_str().to_string());
                    cols.weight_kg = w.kg();
                }
            }
            Self::Timed { duration_sec } => {
                cols.duration_sec = Some(*duration_sec);
            }
        }
        cols
    }
}

/// One nullable column per variant field. Columns outside the entry's
/// variant stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseColumns {
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
}

/// A validated exercise entry, ready to insert under a session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub details: ExerciseDetails,
}

impl NewExercise {
    pub fn exercise_type(&self) -> ExerciseType {
        self.details.exercise_type()
    }
}

/// Validate and normalize an exercise payload.
///
/// Rejects with [`IDENTITY_REQUIRED`] when `name` is absent or blank, then
/// with [`UNKNOWN_TYPE`] when `type` is absent, blank or outside the closed
/// set. Nothing else in the payload can cause a rejection.
pub fn validate_exercise(payload: &Map<String, Value>) -> Result<NewExercise, CoreError> {
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(IDENTITY_REQUIRED.into()))?;

    let exercise_type = payload
        .get("type")
        .and_then(Value::as_str)
        .and_then(ExerciseType::parse)
        .ok_or_else(|| CoreError::Validation(UNKNOWN_TYPE.into()))?;

    Ok(NewExercise {
        name: name.to_string(),
        details: ExerciseDetails::from_payload(exercise_type, payload),
    })
}

/// The unit is only consulted when a weight value is present.
fn read_weight(payload: &Map<String, Value>) -> Option<Weight> {
    let value = clamp_float(payload.get("weight_value"))?;
    let unit = payload
        .get("weight_unit")
        .and_then(Value::as_str)
        .and_then(WeightUnit::parse);
    Some(Weight { value, unit })
}
