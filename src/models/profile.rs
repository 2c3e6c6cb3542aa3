//! Hydration profile model
//!
//! The inputs a goal is computed from, plus the pre-check run before computing.

use serde::{Deserialize, Serialize};

use crate::hydration::validation::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::hydration::{
    calculate_goal_breakdown, is_unusual_weight, validate_activity_level,
    validate_weather_condition, validate_weight, weight_in_kg, GoalBreakdown, HydrationError,
    HydrationResult,
};

fn default_unit() -> String {
    "kg".to_string()
}

/// A person's hydration inputs as entered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationProfile {
    pub weight: Option<f64>,
    /// "kg" or "lb"; anything other than "lb" is read as kg
    #[serde(default = "default_unit")]
    pub unit: String,
    pub activity_level: Option<String>,
    pub weather_condition: Option<String>,
    /// The user confirmed a positive weight below the unusual-weight threshold
    #[serde(default)]
    pub confirm_unusual_weight: bool,
}

/// Outcome of checking a profile before computing its goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCheck {
    pub valid: bool,
    /// Weight is positive but below the threshold and has not been confirmed
    pub needs_confirmation: bool,
    pub errors: Vec<String>,
}

impl HydrationProfile {
    pub fn new(weight: f64, unit: &str, activity_level: &str, weather_condition: &str) -> Self {
        Self {
            weight: Some(weight),
            unit: unit.to_string(),
            activity_level: Some(activity_level.to_string()),
            weather_condition: Some(weather_condition.to_string()),
            confirm_unusual_weight: false,
        }
    }

    /// Weight normalized to kilograms
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.map(|w| weight_in_kg(w, &self.unit))
    }

    fn unusual(&self) -> bool {
        self.weight.is_some_and(|w| is_unusual_weight(w, &self.unit))
    }

    /// Validate every field, collecting all problems
    pub fn check(&self) -> ProfileCheck {
        let mut errors = Vec::new();
        let unusual = self.unusual();

        match self.weight {
            None => errors.push("Weight is required".to_string()),
            Some(_) if unusual && self.confirm_unusual_weight => {}
            Some(_) if !validate_weight(self.weight, &self.unit) => errors.push(format!(
                "Weight must be between {} and {} kg",
                MIN_WEIGHT_KG, MAX_WEIGHT_KG
            )),
            Some(_) => {}
        }

        match self.activity_level.as_deref() {
            None => errors.push("Activity level is required".to_string()),
            Some(level) if !validate_activity_level(Some(level)) => {
                errors.push(format!("Invalid activity level: {}", level))
            }
            Some(_) => {}
        }

        match self.weather_condition.as_deref() {
            None => errors.push("Weather condition is required".to_string()),
            Some(condition) if !validate_weather_condition(Some(condition)) => {
                errors.push(format!("Invalid weather condition: {}", condition))
            }
            Some(_) => {}
        }

        ProfileCheck {
            valid: errors.is_empty(),
            needs_confirmation: unusual && !self.confirm_unusual_weight,
            errors,
        }
    }

    /// Check the profile, then run the goal pipeline on the weight in kg
    pub fn daily_goal(&self) -> HydrationResult<GoalBreakdown> {
        let check = self.check();
        if !check.valid {
            return Err(HydrationError::InvalidProfile(check.errors));
        }
        let (Some(weight_kg), Some(activity), Some(weather)) = (
            self.weight_kg(),
            self.activity_level.as_deref(),
            self.weather_condition.as_deref(),
        ) else {
            return Err(HydrationError::InvalidProfile(check.errors));
        };
        calculate_goal_breakdown(weight_kg, activity, weather)
    }
}
