//! Hydrate Status Tool
//!
//! Runtime status of the service and usage instructions for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Hydration goal instructions for AI assistants
pub const HYDRATION_INSTRUCTIONS: &str = r#"
# Hydrate Instructions

This guide explains how to compute and track a daily water goal with the hydrate tools.

## Overview

A daily goal is computed from three inputs:
1. **Weight** in kg or lb (weights in lb are converted to kg first)
2. **Activity level**: sedentary, light, moderate, active, very_active
3. **Weather condition**: cool (or cold), mild, warm, hot

Activity levels and weather conditions are case-insensitive.

---

## Formula

| Step | Calculation |
|------|-------------|
| Base | weight_kg × 35 ml |
| Activity | base × multiplier |
| Weather | activity-adjusted + adjustment |
| Goal | rounded to the nearest 50 ml |

| Activity | Multiplier |   | Weather | Adjustment |
|----------|------------|---|---------|------------|
| sedentary | 1.0 |   | cool / cold | +0 ml |
| light | 1.1 |   | mild | +200 ml |
| moderate | 1.2 |   | warm | +400 ml |
| active | 1.3 |   | hot | +600 ml |
| very_active | 1.4 | | | |

**Example:** 70 kg, moderate, hot → 2450 → 2940 → 3540 → **3550 ml**

---

## Workflow

1. Call `check_profile` with the user's weight, unit, activity level and weather.
2. If `needs_confirmation` is true, the weight is below 20 kg. Ask the user to confirm it,
   then call `check_profile` again with `confirm_unusual_weight: true`.
3. If `valid` is false, show the `errors` and ask for corrected values.
4. A valid profile returns the goal with its full breakdown.

Use `calculate_water_goal` directly only when the weight is already known to be in kg
and the inputs have already been validated.

---

## Validation Rules

- Weight must be between 20 and 300 kg (inclusive).
- A single drink must be between 1 and 1000 ml.
- Quick-add amounts: 100 ml, 200 ml, 250 ml, 500 ml.

## Progress

`progress` and `summarize_intake` report a percentage capped at 100 with a color band:

| Percent | Band | Color |
|---------|------|-------|
| < 50 | low | #ef4444 |
| 50-74 | moderate | #f59e0b |
| 75-89 | good | #10b981 |
| ≥ 90 | excellent | #059669 |

## Units

- 1 kg = 2.20462 lb
- 1 ml = 0.033814 oz, 1 oz = 29.5735 ml
- Amounts of 1000 ml or more display in liters ("1.5L"), smaller ones in ml ("500ml").
"#;

/// Runtime status of the hydrate service
#[derive(Debug, Clone, Serialize)]
pub struct HydrateStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self) -> HydrateStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HydrateStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
