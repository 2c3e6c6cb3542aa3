//! Hydration error types

use thiserror::Error;

/// Invalid-argument failures raised by the goal calculation path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydrationError {
    #[error("Weight must be greater than 0, got {0}")]
    NonPositiveWeight(f64),

    #[error("Invalid activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("Invalid weather condition: {0}")]
    UnknownWeatherCondition(String),

    #[error("Invalid profile: {}", .0.join("; "))]
    InvalidProfile(Vec<String>),
}

/// Result type for hydration calculations
pub type HydrationResult<T> = Result<T, HydrationError>;
