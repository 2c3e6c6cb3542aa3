//! Unit types and conversion constants
//!
//! Weight (kg/lb) and volume (ml/oz) conversions used by the goal pipeline
//! and the validation helpers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Fluid ounces per milliliter
pub const OZ_PER_ML: f64 = 0.033814;
/// Milliliters per fluid ounce
///
/// Not the exact reciprocal of [`OZ_PER_ML`]; both literals are used as-is.
pub const ML_PER_OZ: f64 = 29.5735;

/// Weight unit accepted on input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Some(WeightUnit::Kg),
            "lb" => Some(WeightUnit::Lb),
            _ => None,
        }
    }

    /// Resolve a loosely specified unit: "lb" means pounds, anything else kilograms
    pub fn from_str_or_kg(s: &str) -> Self {
        if s.eq_ignore_ascii_case("lb") {
            WeightUnit::Lb
        } else {
            WeightUnit::Kg
        }
    }

    /// The unit a value converts into
    pub fn other(&self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lb,
            WeightUnit::Lb => WeightUnit::Kg,
        }
    }
}

/// Direction of a volume conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeDirection {
    MlToOz,
    OzToMl,
}

impl VolumeDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "ml_to_oz" => Some(VolumeDirection::MlToOz),
            "oz_to_ml" => Some(VolumeDirection::OzToMl),
            _ => None,
        }
    }

    pub fn target_unit(&self) -> &'static str {
        match self {
            VolumeDirection::MlToOz => "oz",
            VolumeDirection::OzToMl => "ml",
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

pub fn convert_kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn convert_lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

pub fn convert_ml_to_oz(ml: f64) -> f64 {
    ml * OZ_PER_ML
}

pub fn convert_oz_to_ml(oz: f64) -> f64 {
    oz * ML_PER_OZ
}

/// Convert a weight out of `from_unit` into the other unit
///
/// No sign or range checks: zero and negative values pass straight through.
pub fn convert_weight(value: f64, from_unit: WeightUnit) -> f64 {
    match from_unit {
        WeightUnit::Kg => convert_kg_to_lb(value),
        WeightUnit::Lb => convert_lb_to_kg(value),
    }
}

/// Convert a volume in the given direction
pub fn convert_volume(value: f64, direction: VolumeDirection) -> f64 {
    match direction {
        VolumeDirection::MlToOz => convert_ml_to_oz(value),
        VolumeDirection::OzToMl => convert_oz_to_ml(value),
    }
}

/// Normalize a weight to kilograms, treating any unit other than "lb" as kg
pub fn weight_in_kg(weight: f64, unit: &str) -> f64 {
    match WeightUnit::from_str_or_kg(unit) {
        WeightUnit::Lb => convert_lb_to_kg(weight),
        WeightUnit::Kg => weight,
    }
}
