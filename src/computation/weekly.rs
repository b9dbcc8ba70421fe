//! Weekly aggregation of daily summaries.
//!
//! Sums a seven-day range of daily summaries into a [`WeeklyReport`]. The
//! aggregation is a straight element-wise sum of the five numeric fields;
//! days with no summary simply contribute nothing.

use chrono::{Duration, NaiveDate};

use crate::models::{DailySummary, WeeklyReport, WeeklyTotals};

/// Number of days covered by a weekly report.
pub const WEEK_DAYS: i64 = 7;

/// Aggregates daily summaries over `[week_start, week_start + 6]`.
///
/// `scope` limits the report to one user; `None` covers everyone and the
/// report's `user_id` becomes `"all"`. Summaries outside the week or the
/// scope are ignored, and the retained days are ordered by date (then user
/// id, for a stable order when the report covers everyone).
///
/// # Example
///
/// ```
/// use attendance_engine::computation::aggregate_weekly;
/// use chrono::NaiveDate;
///
/// let week_start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let report = aggregate_weekly(None, week_start, vec![]);
/// assert_eq!(report.user_id, "all");
/// assert!(report.days.is_empty());
/// ```
pub fn aggregate_weekly(
    scope: Option<&str>,
    week_start: NaiveDate,
    summaries: Vec<DailySummary>,
) -> WeeklyReport {
    let week_end = week_start + Duration::days(WEEK_DAYS - 1);

    let mut days: Vec<DailySummary> = summaries
        .into_iter()
        .filter(|s| s.date >= week_start && s.date <= week_end)
        .filter(|s| scope.is_none_or(|user_id| s.user_id == user_id))
        .collect();
    days.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.user_id.cmp(&b.user_id)));

    let mut totals = WeeklyTotals::default();
    for day in &days {
        totals.regular_hours += day.regular_hours;
        totals.overtime_hours += day.overtime_hours;
        totals.night_diff_hours += day.night_diff_hours;
        totals.late_minutes += day.late_minutes;
        totals.undertime_minutes += day.undertime_minutes;
    }

    WeeklyReport {
        user_id: scope.unwrap_or("all").to_string(),
        week_start,
        totals,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn summary(user_id: &str, date: NaiveDate) -> DailySummary {
        DailySummary {
            user_id: user_id.to_string(),
            user_name: None,
            date,
            timezone: "UTC".to_string(),
            total_worked_hours: dec("8.0"),
            regular_hours: dec("8.0"),
            overtime_hours: dec("0.5"),
            night_diff_hours: dec("1.0"),
            late_minutes: 5,
            undertime_minutes: 10,
            generated_at: Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap(),
        }
    }

    // ==========================================================================
    // Five 8-hour days sum to a 40-hour regular week.
    // ==========================================================================
    #[test]
    fn test_five_days_sum_to_forty_regular_hours() {
        let days: Vec<DailySummary> = (0..5)
            .map(|offset| summary("user_001", week_start() + Duration::days(offset)))
            .collect();

        let report = aggregate_weekly(Some("user_001"), week_start(), days);

        assert_eq!(report.totals.regular_hours, dec("40.0"));
        assert_eq!(report.totals.overtime_hours, dec("2.5"));
        assert_eq!(report.totals.night_diff_hours, dec("5.0"));
        assert_eq!(report.totals.late_minutes, 25);
        assert_eq!(report.totals.undertime_minutes, 50);
        assert_eq!(report.days.len(), 5);
        assert_eq!(report.user_id, "user_001");
    }

    #[test]
    fn test_totals_equal_field_sums_over_retained_days() {
        let days = vec![
            summary("user_001", week_start()),
            summary("user_001", week_start() + Duration::days(3)),
        ];
        let report = aggregate_weekly(Some("user_001"), week_start(), days);

        let regular: Decimal = report.days.iter().map(|d| d.regular_hours).sum();
        let late: i64 = report.days.iter().map(|d| d.late_minutes).sum();
        assert_eq!(report.totals.regular_hours, regular);
        assert_eq!(report.totals.late_minutes, late);
    }

    #[test]
    fn test_summaries_outside_week_excluded() {
        let days = vec![
            summary("user_001", week_start() - Duration::days(1)),
            summary("user_001", week_start()),
            summary("user_001", week_start() + Duration::days(6)),
            summary("user_001", week_start() + Duration::days(7)),
        ];
        let report = aggregate_weekly(Some("user_001"), week_start(), days);
        assert_eq!(report.days.len(), 2);
        assert_eq!(report.totals.regular_hours, dec("16.0"));
    }

    #[test]
    fn test_scope_filters_to_one_user() {
        let days = vec![
            summary("user_001", week_start()),
            summary("user_002", week_start()),
        ];
        let report = aggregate_weekly(Some("user_002"), week_start(), days);
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].user_id, "user_002");
    }

    #[test]
    fn test_unscoped_report_covers_all_users() {
        let days = vec![
            summary("user_002", week_start() + Duration::days(1)),
            summary("user_001", week_start()),
            summary("user_001", week_start() + Duration::days(1)),
        ];
        let report = aggregate_weekly(None, week_start(), days);

        assert_eq!(report.user_id, "all");
        assert_eq!(report.days.len(), 3);
        // Ordered by date, then user id.
        assert_eq!(report.days[0].user_id, "user_001");
        assert_eq!(report.days[1].user_id, "user_001");
        assert_eq!(report.days[2].user_id, "user_002");
    }

    #[test]
    fn test_missing_days_contribute_nothing() {
        let report = aggregate_weekly(Some("user_001"), week_start(), vec![]);
        assert_eq!(report.totals, WeeklyTotals::default());
        assert!(report.days.is_empty());
    }
}
