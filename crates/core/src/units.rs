//! Weight unit conversion. Kilograms are the canonical storage unit.

/// Kilograms per avoirdupois pound (exact).
pub const KG_PER_LB: f64 = 0.45359237;

/// Units accepted for strength-set weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    /// Parse a unit tag, case- and whitespace-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "kg" => Some(Self::Kg),
            "lb" => Some(Self::Lb),
            _ => None,
        }
    }

    /// The tag stored in the `weight_unit` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

/// Convert `value` in `unit` to kilograms.
///
/// Without a recognised unit there is no canonical weight. Never fails, even
/// for implausible magnitudes.
pub fn to_kg(value: f64, unit: Option<WeightUnit>) -> Option<f64> {
    match unit? {
        WeightUnit::Kg => Some(value),
        WeightUnit::Lb => Some(value * KG_PER_LB),
    }
}
