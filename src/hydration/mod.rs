//! Hydration calculation module
//!
//! Pure, stateless functions: unit conversions, the daily goal formula,
//! progress/formatting helpers and input validation.

pub mod error;
pub mod goal;
pub mod progress;
pub mod units;
pub mod validation;

pub use error::{HydrationError, HydrationResult};
pub use goal::{
    activity_levels, activity_multiplier, calculate_daily_water_goal, calculate_goal_breakdown,
    weather_adjustment_ml, weather_conditions, GoalBreakdown,
};
pub use progress::{
    format_amount, get_progress_percentage, progress_band, ProgressBand, QUICK_ADD_AMOUNTS_ML,
};
pub use units::{
    convert_kg_to_lb, convert_lb_to_kg, convert_ml_to_oz, convert_oz_to_ml, convert_volume,
    convert_weight, weight_in_kg, VolumeDirection, WeightUnit,
};
pub use validation::{
    is_unusual_weight, validate_activity_level, validate_log_amount, validate_weather_condition,
    validate_weight,
};
