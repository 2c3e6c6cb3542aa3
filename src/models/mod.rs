//! Data models
//!
//! Profile inputs and water log entries. Nothing here is persisted.

mod profile;
mod water_log;

pub use profile::{HydrationProfile, ProfileCheck};
pub use water_log::{summarize_by_day, DailyIntake, WaterLog};
