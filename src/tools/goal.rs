//! Goal MCP Tools
//!
//! Goal calculation, unit conversion and weight/profile checks.

use serde::Serialize;

use crate::hydration::{
    calculate_goal_breakdown, convert_ml_to_oz, convert_volume, convert_weight, format_amount,
    get_progress_percentage, is_unusual_weight, progress_band, validate_weight, weight_in_kg,
    GoalBreakdown, VolumeDirection, WeightUnit,
};
use crate::models::{HydrationProfile, ProfileCheck};

/// Response for calculate_water_goal
#[derive(Debug, Serialize)]
pub struct WaterGoalResponse {
    pub goal_ml: f64,
    pub goal_oz: f64,
    pub goal_formatted: String,
    pub breakdown: GoalBreakdown,
}

impl From<GoalBreakdown> for WaterGoalResponse {
    fn from(breakdown: GoalBreakdown) -> Self {
        Self {
            goal_ml: breakdown.goal_ml,
            goal_oz: convert_ml_to_oz(breakdown.goal_ml),
            goal_formatted: format_amount(breakdown.goal_ml),
            breakdown,
        }
    }
}

/// Response for convert_weight / convert_volume
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
}

/// Response for progress
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub current_ml: f64,
    pub goal_ml: f64,
    pub percent: i32,
    pub band: String,
    pub color: String,
    pub current_formatted: String,
    pub goal_formatted: String,
}

/// Response for check_weight
#[derive(Debug, Serialize)]
pub struct WeightCheckResponse {
    pub weight: Option<f64>,
    pub unit: String,
    pub weight_kg: Option<f64>,
    pub valid: bool,
    pub unusual: bool,
}

/// Response for check_profile
#[derive(Debug, Serialize)]
pub struct ProfileCheckResponse {
    #[serde(flatten)]
    pub check: ProfileCheck,
    pub goal: Option<WaterGoalResponse>,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Calculate the daily goal for a weight already in kg
pub fn calculate_water_goal(
    weight_kg: f64,
    activity_level: &str,
    weather_condition: &str,
) -> Result<WaterGoalResponse, String> {
    tracing::debug!(weight_kg, activity_level, weather_condition, "calculate_water_goal");

    let breakdown = calculate_goal_breakdown(weight_kg, activity_level, weather_condition)
        .map_err(|e| {
            tracing::warn!("Rejected goal request: {}", e);
            e.to_string()
        })?;

    Ok(breakdown.into())
}

/// Convert a weight from kg to lb or lb to kg
pub fn convert_weight_value(value: f64, from_unit: &str) -> Result<ConversionResponse, String> {
    let unit = WeightUnit::from_str(from_unit).ok_or_else(|| {
        tracing::warn!("Unknown weight unit: {}", from_unit);
        format!("Unknown weight unit '{}'. Expected 'kg' or 'lb'", from_unit)
    })?;

    Ok(ConversionResponse {
        value,
        from_unit: unit.as_str().to_string(),
        result: convert_weight(value, unit),
        to_unit: unit.other().as_str().to_string(),
    })
}

/// Convert a volume in the given direction ("ml_to_oz" or "oz_to_ml")
pub fn convert_volume_value(value: f64, direction: &str) -> Result<ConversionResponse, String> {
    let dir = VolumeDirection::from_str(direction).ok_or_else(|| {
        tracing::warn!("Unknown volume direction: {}", direction);
        format!(
            "Unknown volume direction '{}'. Expected 'ml_to_oz' or 'oz_to_ml'",
            direction
        )
    })?;

    let from_unit = match dir {
        VolumeDirection::MlToOz => "ml",
        VolumeDirection::OzToMl => "oz",
    };

    Ok(ConversionResponse {
        value,
        from_unit: from_unit.to_string(),
        result: convert_volume(value, dir),
        to_unit: dir.target_unit().to_string(),
    })
}

/// Progress of `current_ml` toward `goal_ml`
pub fn progress(current_ml: f64, goal_ml: f64) -> ProgressResponse {
    let percent = get_progress_percentage(current_ml, goal_ml);
    let band = progress_band(percent);

    ProgressResponse {
        current_ml,
        goal_ml,
        percent,
        band: band.as_str().to_string(),
        color: band.color().to_string(),
        current_formatted: format_amount(current_ml),
        goal_formatted: format_amount(goal_ml),
    }
}

/// Range and unusual-weight verdicts for a weight
pub fn check_weight(weight: Option<f64>, unit: &str) -> WeightCheckResponse {
    WeightCheckResponse {
        weight,
        unit: unit.to_string(),
        weight_kg: weight.map(|w| weight_in_kg(w, unit)),
        valid: validate_weight(weight, unit),
        unusual: weight.is_some_and(|w| is_unusual_weight(w, unit)),
    }
}

/// Pre-check a profile and compute its goal when it passes
pub fn check_profile(profile: &HydrationProfile) -> ProfileCheckResponse {
    let check = profile.check();
    if !check.valid {
        tracing::warn!("Profile rejected: {:?}", check.errors);
    }

    let goal = if check.valid {
        profile.daily_goal().ok().map(WaterGoalResponse::from)
    } else {
        None
    };

    ProfileCheckResponse { check, goal }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_water_goal() {
        let resp = calculate_water_goal(70.0, "moderate", "hot").unwrap();
        assert_eq!(resp.goal_ml, 3550.0);
        assert_eq!(resp.goal_formatted, "3.6L");
        assert!((resp.goal_oz - 120.04).abs() < 0.05);
    }

    #[test]
    fn test_calculate_water_goal_errors() {
        let err = calculate_water_goal(0.0, "moderate", "hot").unwrap_err();
        assert!(err.contains("greater than 0"));
        let err = calculate_water_goal(70.0, "nope", "hot").unwrap_err();
        assert_eq!(err, "Invalid activity level: nope");
    }

    #[test]
    fn test_convert_weight_value() {
        let resp = convert_weight_value(70.0, "KG").unwrap();
        assert_eq!(resp.to_unit, "lb");
        assert!((resp.result - 154.3234).abs() < 0.01);
        assert!(convert_weight_value(70.0, "stone").is_err());
    }

    #[test]
    fn test_convert_volume_value() {
        let resp = convert_volume_value(3450.0, "ml_to_oz").unwrap();
        assert_eq!(resp.from_unit, "ml");
        assert_eq!(resp.to_unit, "oz");
        assert!((resp.result - 116.66).abs() < 0.05);
        assert!(convert_volume_value(1.0, "cups").is_err());
    }

    #[test]
    fn test_progress() {
        let resp = progress(1725.0, 3450.0);
        assert_eq!(resp.percent, 50);
        assert_eq!(resp.band, "moderate");
        assert_eq!(resp.current_formatted, "1.7L");
    }

    #[test]
    fn test_check_weight() {
        let resp = check_weight(Some(19.9), "kg");
        assert!(!resp.valid);
        assert!(resp.unusual);

        let resp = check_weight(None, "kg");
        assert!(!resp.valid);
        assert!(!resp.unusual);
        assert_eq!(resp.weight_kg, None);
    }

    #[test]
    fn test_check_profile() {
        let resp = check_profile(&HydrationProfile::new(70.0, "kg", "moderate", "hot"));
        assert!(resp.check.valid);
        assert_eq!(resp.goal.map(|g| g.goal_ml), Some(3550.0));

        let resp = check_profile(&HydrationProfile::new(70.0, "kg", "moderate", "arctic"));
        assert!(!resp.check.valid);
        assert!(resp.goal.is_none());
    }
}
