//! Intake MCP Tools
//!
//! Log amount checks and daily intake rollups.

use serde::Serialize;

use crate::hydration::validation::{MAX_LOG_AMOUNT_ML, MIN_LOG_AMOUNT_ML};
use crate::hydration::{format_amount, validate_log_amount, QUICK_ADD_AMOUNTS_ML};
use crate::models::{summarize_by_day, DailyIntake, WaterLog};

/// Response for validate_log_amount
#[derive(Debug, Serialize)]
pub struct LogAmountResponse {
    pub amount_ml: Option<f64>,
    pub valid: bool,
    pub message: Option<String>,
    /// Quick-add amounts offered when the amount is rejected
    pub suggestions: Vec<String>,
}

/// Response for summarize_intake
#[derive(Debug, Serialize)]
pub struct IntakeSummaryResponse {
    pub goal_ml: f64,
    pub goal_formatted: String,
    pub days: Vec<DailyIntake>,
    pub total_days: usize,
    pub skipped_entries: usize,
}

pub fn check_log_amount(amount_ml: Option<f64>) -> LogAmountResponse {
    let valid = validate_log_amount(amount_ml);
    let message = match amount_ml {
        _ if valid => None,
        None => Some("Amount is required".to_string()),
        Some(_) => Some(format!(
            "Amount must be between {} and {} ml",
            MIN_LOG_AMOUNT_ML, MAX_LOG_AMOUNT_ML
        )),
    };

    let suggestions = if valid {
        Vec::new()
    } else {
        QUICK_ADD_AMOUNTS_ML.iter().map(|ml| format_amount(*ml)).collect()
    };

    LogAmountResponse {
        amount_ml,
        valid,
        message,
        suggestions,
    }
}

/// Roll up log entries per day against a goal
///
/// Entries with an amount outside the loggable range are skipped and counted.
pub fn summarize_intake(
    logs: Vec<WaterLog>,
    goal_ml: f64,
) -> Result<IntakeSummaryResponse, String> {
    if !(goal_ml >= 0.0) {
        return Err(format!("Goal must be zero or positive, got {}", goal_ml));
    }

    let total = logs.len();
    let accepted: Vec<WaterLog> = logs
        .into_iter()
        .filter(|log| validate_log_amount(Some(log.amount_ml)))
        .collect();
    let skipped_entries = total - accepted.len();
    if skipped_entries > 0 {
        tracing::warn!("Skipped {} out-of-range log entries", skipped_entries);
    }

    let days = summarize_by_day(&accepted, goal_ml);
    tracing::debug!(days = days.len(), entries = accepted.len(), "summarize_intake");

    Ok(IntakeSummaryResponse {
        goal_ml,
        goal_formatted: format_amount(goal_ml),
        total_days: days.len(),
        days,
        skipped_entries,
    })
}
