//! Daily summary and weekly report models.
//!
//! A [`DailySummary`] is the persisted output of a daily computation, one
//! per (user, local calendar date), overwritten on recomputation. A
//! [`WeeklyReport`] is purely derived from a date range of daily summaries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classified work-hour summary for one user on one local calendar date.
///
/// Hour fields are rounded to 2 decimal places; minute fields to the
/// nearest integer. Night-differential hours overlap the regular/overtime
/// split by design: a span worked inside the night window counts toward
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The user this summary belongs to.
    pub user_id: String,
    /// Display name carried from the user profile, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// The local calendar date the summary covers.
    pub date: NaiveDate,
    /// The IANA timezone the computation ran in.
    pub timezone: String,
    /// Total worked hours across all work intervals.
    pub total_worked_hours: Decimal,
    /// Worked hours overlapping the schedule window.
    pub regular_hours: Decimal,
    /// Worked hours outside the schedule window.
    pub overtime_hours: Decimal,
    /// Worked hours overlapping the 22:00-06:00 night window.
    pub night_diff_hours: Decimal,
    /// Minutes between the scheduled start and the first clock-in, if late.
    pub late_minutes: i64,
    /// Minutes between the last clock-out and the scheduled end, if short.
    pub undertime_minutes: i64,
    /// When this summary was computed.
    pub generated_at: DateTime<Utc>,
}

/// Element-wise sums of the five numeric [`DailySummary`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotals {
    /// Sum of regular hours across the week.
    pub regular_hours: Decimal,
    /// Sum of overtime hours across the week.
    pub overtime_hours: Decimal,
    /// Sum of night-differential hours across the week.
    pub night_diff_hours: Decimal,
    /// Sum of late minutes across the week.
    pub late_minutes: i64,
    /// Sum of undertime minutes across the week.
    pub undertime_minutes: i64,
}

/// A weekly aggregation of daily summaries.
///
/// Created or overwritten on each weekly-report request; never
/// independently mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// The scoped user id, or `"all"` when the report covers everyone.
    pub user_id: String,
    /// The first date of the week (inclusive; the range runs 7 days).
    pub week_start: NaiveDate,
    /// Element-wise sums of the constituent summaries.
    pub totals: WeeklyTotals,
    /// The constituent daily summaries, ordered by date.
    pub days: Vec<DailySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_summary() -> DailySummary {
        DailySummary {
            user_id: "user_001".to_string(),
            user_name: Some("Alex Reyes".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            timezone: "UTC".to_string(),
            total_worked_hours: Decimal::from_str("8.67").unwrap(),
            regular_hours: Decimal::from_str("8.5").unwrap(),
            overtime_hours: Decimal::from_str("0.17").unwrap(),
            night_diff_hours: Decimal::ZERO,
            late_minutes: 0,
            undertime_minutes: 30,
            generated_at: DateTime::parse_from_rfc3339("2026-01-16T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: DailySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn test_absent_user_name_is_omitted() {
        let summary = DailySummary {
            user_name: None,
            ..sample_summary()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("user_name"));
    }

    #[test]
    fn test_weekly_totals_default_is_zero() {
        let totals = WeeklyTotals::default();
        assert_eq!(totals.regular_hours, Decimal::ZERO);
        assert_eq!(totals.late_minutes, 0);
    }
}
