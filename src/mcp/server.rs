//! Hydrate MCP Server Implementation
//!
//! Exposes the hydration tools over MCP.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::hydration::format_amount;
use crate::models::{HydrationProfile, WaterLog};
use crate::tools::status::StatusTracker;
use crate::tools::{goal, intake};

/// Hydrate MCP Service
#[derive(Clone)]
pub struct HydrateService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<HydrateService>,
}

impl HydrateService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for HydrateService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateWaterGoalParams {
    /// Body weight in kilograms (must be > 0)
    pub weight_kg: f64,
    /// sedentary, light, moderate, active, or very_active
    pub activity_level: String,
    /// cool, cold, mild, warm, or hot
    pub weather_condition: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    pub value: f64,
    /// Unit the value is in: "kg" or "lb"
    pub from_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertVolumeParams {
    pub value: f64,
    /// "ml_to_oz" or "oz_to_ml"
    pub direction: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProgressParams {
    /// Amount consumed so far in ml
    pub current_ml: f64,
    /// Daily goal in ml
    pub goal_ml: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatAmountParams {
    pub amount_ml: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckWeightParams {
    pub weight: Option<f64>,
    /// "kg" (default) or "lb"
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String { "kg".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckProfileParams {
    pub weight: Option<f64>,
    /// "kg" (default) or "lb"
    #[serde(default = "default_unit")]
    pub unit: String,
    pub activity_level: Option<String>,
    pub weather_condition: Option<String>,
    /// Set after the user confirms a weight below 20 kg
    #[serde(default)]
    pub confirm_unusual_weight: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateLogAmountParams {
    pub amount_ml: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogEntryParam {
    pub amount_ml: f64,
    /// RFC 3339 timestamp, e.g. "2026-01-14T08:30:00Z"
    pub logged_at: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeIntakeParams {
    /// Daily goal in ml
    pub goal_ml: f64,
    pub entries: Vec<LogEntryParam>,
}

#[derive(Debug, Serialize)]
struct FormatAmountResponse {
    amount_ml: f64,
    formatted: String,
}

fn parse_entries(entries: Vec<LogEntryParam>) -> Result<Vec<WaterLog>, String> {
    entries
        .into_iter()
        .map(|e| {
            DateTime::parse_from_rfc3339(&e.logged_at)
                .map(|ts| WaterLog {
                    amount_ml: e.amount_ml,
                    logged_at: ts.with_timezone(&Utc),
                })
                .map_err(|err| format!("Invalid logged_at '{}': {}", e.logged_at, err))
        })
        .collect()
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl HydrateService {
    // --- Status ---

    #[tool(description = "Get the current status of the hydrate service including build info and process information")]
    async fn hydrate_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for computing and tracking a daily water goal. Call this first when unsure how to use the hydration tools.")]
    fn hydration_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::HYDRATION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(HYDRATION_INSTRUCTIONS)]))
    }

    // --- Goal ---

    #[tool(description = "Calculate the recommended daily water intake (ml, rounded to 50 ml) from weight in kg, activity level and weather condition")]
    fn calculate_water_goal(&self, Parameters(p): Parameters<CalculateWaterGoalParams>) -> Result<CallToolResult, McpError> {
        let result = goal::calculate_water_goal(p.weight_kg, &p.activity_level, &p.weather_condition)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Validate a full profile (weight, unit, activity level, weather) and compute its goal when valid. Reports whether an unusually low weight needs user confirmation.")]
    fn check_profile(&self, Parameters(p): Parameters<CheckProfileParams>) -> Result<CallToolResult, McpError> {
        let profile = HydrationProfile {
            weight: p.weight,
            unit: p.unit,
            activity_level: p.activity_level,
            weather_condition: p.weather_condition,
            confirm_unusual_weight: p.confirm_unusual_weight,
        };
        to_json(&goal::check_profile(&profile))
    }

    #[tool(description = "Check whether a weight is within the accepted 20-300 kg range and whether it is unusually low (below 20 kg)")]
    fn check_weight(&self, Parameters(p): Parameters<CheckWeightParams>) -> Result<CallToolResult, McpError> {
        to_json(&goal::check_weight(p.weight, &p.unit))
    }

    // --- Conversions ---

    #[tool(description = "Convert a weight between kg and lb")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        let result = goal::convert_weight_value(p.value, &p.from_unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert a volume between ml and fluid ounces")]
    fn convert_volume(&self, Parameters(p): Parameters<ConvertVolumeParams>) -> Result<CallToolResult, McpError> {
        let result = goal::convert_volume_value(p.value, &p.direction)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Progress ---

    #[tool(description = "Percentage of the daily goal reached (capped at 100) with a color band")]
    fn progress(&self, Parameters(p): Parameters<ProgressParams>) -> Result<CallToolResult, McpError> {
        to_json(&goal::progress(p.current_ml, p.goal_ml))
    }

    #[tool(description = "Format an amount in ml for display (\"500ml\" or \"1.5L\")")]
    fn format_amount(&self, Parameters(p): Parameters<FormatAmountParams>) -> Result<CallToolResult, McpError> {
        to_json(&FormatAmountResponse {
            amount_ml: p.amount_ml,
            formatted: format_amount(p.amount_ml),
        })
    }

    // --- Intake ---

    #[tool(description = "Check that a single drink amount is between 1 and 1000 ml")]
    fn validate_log_amount(&self, Parameters(p): Parameters<ValidateLogAmountParams>) -> Result<CallToolResult, McpError> {
        to_json(&intake::check_log_amount(p.amount_ml))
    }

    #[tool(description = "Group water log entries by day (UTC) and report each day's total and progress against the goal, newest first")]
    fn summarize_intake(&self, Parameters(p): Parameters<SummarizeIntakeParams>) -> Result<CallToolResult, McpError> {
        let logs = parse_entries(p.entries).map_err(|e| McpError::invalid_params(e, None))?;
        let result = intake::summarize_intake(logs, p.goal_ml)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HydrateService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "hydrate".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Hydration Goal Manager".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Hydration Goal Manager (hydrate) - daily water intake goals. \
                 IMPORTANT: Call hydration_instructions first. \
                 Goal: check_profile (validate then compute), calculate_water_goal (weight in kg). \
                 Checks: check_weight, validate_log_amount. \
                 Conversions: convert_weight (kg/lb), convert_volume (ml/oz). \
                 Display: progress, format_amount, summarize_intake."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let logs = parse_entries(vec![LogEntryParam {
            amount_ml: 250.0,
            logged_at: "2026-01-14T23:30:00-02:00".to_string(),
        }])
        .unwrap();
        assert_eq!(logs.len(), 1);
        // Normalized to UTC, which moves it to the next day
        assert_eq!(logs[0].logged_at.to_rfc3339(), "2026-01-15T01:30:00+00:00");
    }

    #[test]
    fn test_parse_entries_rejects_bad_timestamp() {
        let err = parse_entries(vec![LogEntryParam {
            amount_ml: 250.0,
            logged_at: "yesterday".to_string(),
        }])
        .unwrap_err();
        assert!(err.contains("yesterday"));
    }

    #[test]
    fn test_server_info() {
        let info = HydrateService::new().get_info();
        assert_eq!(info.server_info.name, "hydrate");
        assert!(info.capabilities.tools.is_some());
    }
}
