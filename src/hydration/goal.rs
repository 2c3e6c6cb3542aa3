//! Daily water goal calculation
//!
//! weight (kg) -> base amount -> activity-adjusted -> weather-adjusted -> rounded.
//! The lookup tables are immutable and keyed by lower-case names.

use serde::Serialize;

use super::error::{HydrationError, HydrationResult};

/// Milliliters of water per kilogram of body weight
pub const ML_PER_KG: f64 = 35.0;
/// Goals are rounded to the nearest multiple of this many milliliters
pub const ROUNDING_INTERVAL_ML: f64 = 50.0;

/// Activity level multipliers
pub const ACTIVITY_MULTIPLIERS: &[(&str, f64)] = &[
    ("sedentary", 1.0),
    ("light", 1.1),
    ("moderate", 1.2),
    ("active", 1.3),
    ("very_active", 1.4),
];

/// Weather condition adjustments in milliliters
pub const WEATHER_ADJUSTMENTS_ML: &[(&str, f64)] = &[
    ("cool", 0.0),
    // alias of cool
    ("cold", 0.0),
    ("mild", 200.0),
    ("warm", 400.0),
    ("hot", 600.0),
];

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    let lower = key.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, value)| *value)
}

/// Multiplier for an activity level (case-insensitive)
pub fn activity_multiplier(activity_level: &str) -> Option<f64> {
    lookup(ACTIVITY_MULTIPLIERS, activity_level)
}

/// Weather adjustment in ml for a condition (case-insensitive)
pub fn weather_adjustment_ml(weather_condition: &str) -> Option<f64> {
    lookup(WEATHER_ADJUSTMENTS_ML, weather_condition)
}

/// Known activity level names, in table order
pub fn activity_levels() -> impl Iterator<Item = &'static str> {
    ACTIVITY_MULTIPLIERS.iter().map(|(name, _)| *name)
}

/// Known weather condition names, in table order
pub fn weather_conditions() -> impl Iterator<Item = &'static str> {
    WEATHER_ADJUSTMENTS_ML.iter().map(|(name, _)| *name)
}

/// Round half up (0.5 goes toward +inf, also for negative values)
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Every intermediate value of the goal pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalBreakdown {
    pub weight_kg: f64,
    pub activity_level: String,
    pub weather_condition: String,
    pub activity_multiplier: f64,
    pub weather_adjustment_ml: f64,
    pub base_ml: f64,
    pub activity_adjusted_ml: f64,
    pub weather_adjusted_ml: f64,
    pub goal_ml: f64,
}

/// Run the goal pipeline and keep every step
pub fn calculate_goal_breakdown(
    weight_kg: f64,
    activity_level: &str,
    weather_condition: &str,
) -> HydrationResult<GoalBreakdown> {
    // NaN fails this check too
    if !(weight_kg > 0.0) {
        return Err(HydrationError::NonPositiveWeight(weight_kg));
    }
    let multiplier = activity_multiplier(activity_level)
        .ok_or_else(|| HydrationError::UnknownActivityLevel(activity_level.to_string()))?;
    let adjustment = weather_adjustment_ml(weather_condition)
        .ok_or_else(|| HydrationError::UnknownWeatherCondition(weather_condition.to_string()))?;

    let base_ml = weight_kg * ML_PER_KG;
    let activity_adjusted_ml = base_ml * multiplier;
    let weather_adjusted_ml = activity_adjusted_ml + adjustment;
    let goal_ml = round_half_up(weather_adjusted_ml / ROUNDING_INTERVAL_ML) * ROUNDING_INTERVAL_ML;

    Ok(GoalBreakdown {
        weight_kg,
        activity_level: activity_level.to_lowercase(),
        weather_condition: weather_condition.to_lowercase(),
        activity_multiplier: multiplier,
        weather_adjustment_ml: adjustment,
        base_ml,
        activity_adjusted_ml,
        weather_adjusted_ml,
        goal_ml,
    })
}

/// Recommended daily water intake in ml, rounded to the nearest 50 ml
///
/// Fails when `weight_kg <= 0` or when either key is not in its table.
/// There is no upper clamp on the result.
pub fn calculate_daily_water_goal(
    weight_kg: f64,
    activity_level: &str,
    weather_condition: &str,
) -> HydrationResult<f64> {
    calculate_goal_breakdown(weight_kg, activity_level, weather_condition).map(|b| b.goal_ml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_hot_70kg() {
        let b = calculate_goal_breakdown(70.0, "moderate", "hot").unwrap();
        assert!((b.base_ml - 2450.0).abs() < 0.001);
        assert!((b.activity_adjusted_ml - 2940.0).abs() < 0.001);
        assert!((b.weather_adjusted_ml - 3540.0).abs() < 0.001);
        assert_eq!(b.goal_ml, 3550.0);
        assert_eq!(calculate_daily_water_goal(70.0, "moderate", "hot"), Ok(3550.0));
    }

    #[test]
    fn test_sedentary_cool() {
        // 60 * 35 = 2100
        assert_eq!(calculate_daily_water_goal(60.0, "sedentary", "cool"), Ok(2100.0));
    }

    #[test]
    fn test_case_insensitive_keys() {
        assert_eq!(
            calculate_daily_water_goal(70.0, "MODERATE", "Hot"),
            calculate_daily_water_goal(70.0, "moderate", "hot"),
        );
        assert!(calculate_daily_water_goal(70.0, "Very_Active", "WARM").is_ok());
    }

    #[test]
    fn test_cold_is_alias_of_cool() {
        assert_eq!(weather_adjustment_ml("cold"), weather_adjustment_ml("cool"));
        assert_eq!(
            calculate_daily_water_goal(80.0, "light", "cold"),
            calculate_daily_water_goal(80.0, "light", "cool"),
        );
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert_eq!(
            calculate_daily_water_goal(0.0, "moderate", "hot"),
            Err(HydrationError::NonPositiveWeight(0.0))
        );
        assert!(calculate_daily_water_goal(-5.0, "moderate", "hot").is_err());
        assert!(calculate_daily_water_goal(f64::NAN, "moderate", "hot").is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert_eq!(
            calculate_daily_water_goal(70.0, "couch", "hot"),
            Err(HydrationError::UnknownActivityLevel("couch".to_string()))
        );
        assert_eq!(
            calculate_daily_water_goal(70.0, "moderate", "humid"),
            Err(HydrationError::UnknownWeatherCondition("humid".to_string()))
        );
    }

    #[test]
    fn test_goal_is_multiple_of_50() {
        let weights = [0.5, 1.0, 19.9, 20.0, 45.3, 70.0, 83.7, 120.25, 299.9, 400.0];
        for w in weights {
            for activity in activity_levels() {
                for weather in weather_conditions() {
                    let goal = calculate_daily_water_goal(w, activity, weather).unwrap();
                    assert_eq!(goal % 50.0, 0.0, "{} {} {} -> {}", w, activity, weather, goal);
                }
            }
        }
    }

    #[test]
    fn test_rounds_half_up() {
        // 25 ml / 50 = 0.5 rounds up to one interval
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(70.8), 71.0);
        assert_eq!(round_half_up(70.2), 70.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_round_half_up_near_half_and_large() {
        // largest double below 0.5
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        // odd integer above 2^52 stays put
        let big = 4_503_599_627_370_497.0;
        assert_eq!(round_half_up(big), big);
    }

    #[test]
    fn test_no_upper_clamp() {
        let goal = calculate_daily_water_goal(400.0, "very_active", "hot").unwrap();
        // 400 * 35 * 1.4 + 600 = 20200
        assert_eq!(goal, 20200.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = calculate_goal_breakdown(72.4, "active", "warm").unwrap();
        for _ in 0..10 {
            assert_eq!(calculate_goal_breakdown(72.4, "active", "warm").unwrap(), first);
        }
    }

    #[test]
    fn test_tables_not_empty() {
        assert_eq!(activity_levels().count(), 5);
        assert_eq!(weather_conditions().count(), 5);
    }
}
