//! Water log model
//!
//! In-memory drink entries and their per-day rollup against a goal.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::hydration::{format_amount, get_progress_percentage, progress_band, ProgressBand};

/// A single logged drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub amount_ml: f64,
    pub logged_at: DateTime<Utc>,
}

/// Intake totals for one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyIntake {
    pub date: NaiveDate,
    pub total_ml: f64,
    pub total_formatted: String,
    pub entries: usize,
    pub progress_percent: i32,
    pub band: ProgressBand,
}

/// Group logs by day and measure each day against `goal_ml`, newest day first
pub fn summarize_by_day(logs: &[WaterLog], goal_ml: f64) -> Vec<DailyIntake> {
    let mut days: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for log in logs {
        let entry = days.entry(log.logged_at.date_naive()).or_insert((0.0, 0));
        entry.0 += log.amount_ml;
        entry.1 += 1;
    }

    days.into_iter()
        .rev()
        .map(|(date, (total_ml, entries))| {
            let progress_percent = get_progress_percentage(total_ml, goal_ml);
            DailyIntake {
                date,
                total_ml,
                total_formatted: format_amount(total_ml),
                entries,
                progress_percent,
                band: progress_band(progress_percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(amount_ml: f64, y: i32, m: u32, d: u32, h: u32) -> WaterLog {
        WaterLog {
            amount_ml,
            logged_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_summarize_groups_by_day() {
        let logs = vec![
            log(250.0, 2026, 1, 14, 8),
            log(500.0, 2026, 1, 14, 12),
            log(1000.0, 2026, 1, 15, 9),
            log(200.0, 2026, 1, 13, 23),
        ];
        let days = summarize_by_day(&logs, 2000.0);
        assert_eq!(days.len(), 3);

        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(days[0].total_ml, 1000.0);
        assert_eq!(days[0].progress_percent, 50);
        assert_eq!(days[0].band, ProgressBand::Moderate);
        assert_eq!(days[0].total_formatted, "1.0L");

        assert_eq!(days[1].total_ml, 750.0);
        assert_eq!(days[1].entries, 2);
        assert_eq!(days[1].total_formatted, "750ml");

        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
        assert_eq!(days[2].band, ProgressBand::Low);
    }

    #[test]
    fn test_summarize_caps_progress() {
        let logs = vec![
            log(1000.0, 2026, 2, 1, 8),
            log(1000.0, 2026, 2, 1, 9),
            log(1000.0, 2026, 2, 1, 10),
        ];
        let days = summarize_by_day(&logs, 2500.0);
        assert_eq!(days[0].progress_percent, 100);
        assert_eq!(days[0].band, ProgressBand::Excellent);
    }

    #[test]
    fn test_summarize_empty_and_zero_goal() {
        assert!(summarize_by_day(&[], 2000.0).is_empty());
        let days = summarize_by_day(&[log(300.0, 2026, 3, 1, 7)], 0.0);
        assert_eq!(days[0].progress_percent, 0);
    }
}
