//! Progress and display helpers

use serde::{Deserialize, Serialize};

use super::goal::round_half_up;

/// Display threshold between milliliters and liters
pub const ML_PER_LITER: f64 = 1000.0;

/// Preset amounts offered for one-tap logging
pub const QUICK_ADD_AMOUNTS_ML: [f64; 4] = [100.0, 200.0, 250.0, 500.0];

/// Percentage of the goal reached, rounded and capped at 100
///
/// A zero goal yields 0. There is no lower clamp, so a negative `current`
/// gives a negative percentage.
pub fn get_progress_percentage(current: f64, goal: f64) -> i32 {
    if goal == 0.0 {
        return 0;
    }
    let percent = round_half_up((current / goal) * 100.0);
    // `as` saturates and maps NaN to 0
    percent.min(100.0) as i32
}

/// Human-readable amount: "1.5L" from 1000 ml up, "500ml" below
///
/// Ties round away from zero ("1.3L" for 1250 ml), not to even.
pub fn format_amount(ml: f64) -> String {
    if ml >= ML_PER_LITER {
        // whole deciliters, then one decimal place
        format!("{:.1}L", (ml / 100.0).round() / 10.0)
    } else {
        format!("{:.0}ml", ml.round())
    }
}

/// Color band for a progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Below 50%
    Low,
    /// 50% up to 75%
    Moderate,
    /// 75% up to 90%
    Good,
    /// 90% and above
    Excellent,
}

impl ProgressBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressBand::Low => "low",
            ProgressBand::Moderate => "moderate",
            ProgressBand::Good => "good",
            ProgressBand::Excellent => "excellent",
        }
    }

    /// Hex color used when rendering the band
    pub fn color(&self) -> &'static str {
        match self {
            ProgressBand::Low => "#ef4444",
            ProgressBand::Moderate => "#f59e0b",
            ProgressBand::Good => "#10b981",
            ProgressBand::Excellent => "#059669",
        }
    }
}

pub fn progress_band(percentage: i32) -> ProgressBand {
    match percentage {
        p if p < 50 => ProgressBand::Low,
        p if p < 75 => ProgressBand::Moderate,
        p if p < 90 => ProgressBand::Good,
        _ => ProgressBand::Excellent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(get_progress_percentage(0.0, 3450.0), 0);
        assert_eq!(get_progress_percentage(1725.0, 3450.0), 50);
        assert_eq!(get_progress_percentage(3450.0, 3450.0), 100);
    }

    #[test]
    fn test_progress_capped_at_100() {
        assert_eq!(get_progress_percentage(4000.0, 3450.0), 100);
        assert_eq!(get_progress_percentage(1_000_000.0, 1.0), 100);
    }

    #[test]
    fn test_progress_zero_goal() {
        assert_eq!(get_progress_percentage(500.0, 0.0), 0);
    }

    #[test]
    fn test_progress_rounding_and_negative() {
        // 1/3 -> 33.33
        assert_eq!(get_progress_percentage(1.0, 3.0), 33);
        // 2/3 -> 66.67
        assert_eq!(get_progress_percentage(2.0, 3.0), 67);
        assert_eq!(get_progress_percentage(-500.0, 1000.0), -50);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(500.0), "500ml");
        assert_eq!(format_amount(1500.0), "1.5L");
        assert_eq!(format_amount(1000.0), "1.0L");
        assert_eq!(format_amount(3450.0), "3.5L");
        assert_eq!(format_amount(999.0), "999ml");
        assert_eq!(format_amount(0.0), "0ml");
    }

    #[test]
    fn test_format_amount_ties_round_up() {
        assert_eq!(format_amount(1250.0), "1.3L");
        assert_eq!(format_amount(2250.0), "2.3L");
        assert_eq!(format_amount(3550.0), "3.6L");
        assert_eq!(format_amount(2.5), "3ml");
        assert_eq!(format_amount(1249.0), "1.2L");
    }

    #[test]
    fn test_progress_band() {
        assert_eq!(progress_band(0), ProgressBand::Low);
        assert_eq!(progress_band(49), ProgressBand::Low);
        assert_eq!(progress_band(50), ProgressBand::Moderate);
        assert_eq!(progress_band(74), ProgressBand::Moderate);
        assert_eq!(progress_band(75), ProgressBand::Good);
        assert_eq!(progress_band(89), ProgressBand::Good);
        assert_eq!(progress_band(90), ProgressBand::Excellent);
        assert_eq!(progress_band(100), ProgressBand::Excellent);
        assert_eq!(ProgressBand::Low.color(), "#ef4444");
        assert_eq!(ProgressBand::Excellent.color(), "#059669");
    }
}
