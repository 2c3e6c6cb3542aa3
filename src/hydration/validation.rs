//! Input validation
//!
//! Soft checks that return a verdict instead of an error. Callers run these
//! before computing a goal; the goal calculation keeps its own hard checks.

use super::goal::{activity_multiplier, weather_adjustment_ml};
use super::units::weight_in_kg;

/// Minimum accepted body weight in kg (inclusive)
pub const MIN_WEIGHT_KG: f64 = 20.0;
/// Maximum accepted body weight in kg (inclusive)
pub const MAX_WEIGHT_KG: f64 = 300.0;
/// Weights strictly below this need explicit user confirmation
pub const UNUSUAL_WEIGHT_THRESHOLD_KG: f64 = 20.0;

/// Smallest loggable drink in ml (inclusive)
pub const MIN_LOG_AMOUNT_ML: f64 = 1.0;
/// Largest loggable drink in ml (inclusive)
pub const MAX_LOG_AMOUNT_ML: f64 = 1000.0;

/// True when the weight is positive but below the confirmation threshold
///
/// `unit` is compared case-insensitively against "lb"; anything else is kg.
pub fn is_unusual_weight(weight: f64, unit: &str) -> bool {
    let weight_kg = weight_in_kg(weight, unit);
    weight_kg > 0.0 && weight_kg < UNUSUAL_WEIGHT_THRESHOLD_KG
}

pub fn validate_weight(weight: Option<f64>, unit: &str) -> bool {
    let Some(weight) = weight else {
        return false;
    };
    if !(weight > 0.0) {
        return false;
    }
    let weight_kg = weight_in_kg(weight, unit);
    (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}

pub fn validate_activity_level(level: Option<&str>) -> bool {
    level.is_some_and(|l| activity_multiplier(l).is_some())
}

pub fn validate_weather_condition(condition: Option<&str>) -> bool {
    condition.is_some_and(|c| weather_adjustment_ml(c).is_some())
}

/// A single logged drink must be between 1 and 1000 ml
pub fn validate_log_amount(amount_ml: Option<f64>) -> bool {
    amount_ml.is_some_and(|ml| (MIN_LOG_AMOUNT_ML..=MAX_LOG_AMOUNT_ML).contains(&ml))
}
