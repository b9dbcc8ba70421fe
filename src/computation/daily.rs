//! Daily summary assembly.
//!
//! [`build_daily_summary`] is the primary entry point of the engine: a pure
//! function from a user's raw punch records, profile and local calendar
//! date to a [`DailySummary`]. It performs no I/O; the caller supplies the
//! punch set, the profile and the `generated_at` instant, so recomputation
//! over unchanged inputs is byte-identical.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{DailySummary, PunchRecord, UserProfile};

use super::classify::classify_day;
use super::intervals::build_work_intervals;
use super::normalize::normalize_punches;
use super::windows::{end_of_day, resolve_windows};

/// Computes the classified daily summary for one user and date.
///
/// Malformed punches are dropped, unmatched clock-outs discarded, and an
/// unparseable schedule or timezone falls back to the documented defaults;
/// none of those conditions fail the computation. A day with no usable
/// punches produces an all-zero summary.
///
/// # Example
///
/// ```
/// use attendance_engine::computation::build_daily_summary;
/// use attendance_engine::models::{PunchRecord, PunchType, UserProfile};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let records = vec![
///     PunchRecord::at(PunchType::In, Utc.with_ymd_and_hms(2026, 1, 15, 8, 50, 0).unwrap()),
///     PunchRecord::at(PunchType::Out, Utc.with_ymd_and_hms(2026, 1, 15, 17, 30, 0).unwrap()),
/// ];
///
/// let summary = build_daily_summary("user_001", date, &records, &UserProfile::default(), Utc::now());
/// assert_eq!(summary.total_worked_hours, Decimal::from_str("8.67").unwrap());
/// assert_eq!(summary.undertime_minutes, 30);
/// ```
pub fn build_daily_summary(
    user_id: &str,
    date: NaiveDate,
    records: &[PunchRecord],
    profile: &UserProfile,
    generated_at: DateTime<Utc>,
) -> DailySummary {
    let tz = profile.tz();

    let punches = normalize_punches(records, tz);
    let intervals = build_work_intervals(&punches, end_of_day(date, tz));
    let windows = resolve_windows(date, tz, &profile.schedule);
    let day = classify_day(&intervals, &windows);

    DailySummary {
        user_id: user_id.to_string(),
        user_name: profile.name.clone(),
        date,
        timezone: tz.name().to_string(),
        total_worked_hours: day.total_hours,
        regular_hours: day.regular_hours,
        overtime_hours: day.overtime_hours,
        night_diff_hours: day.night_diff_hours,
        late_minutes: day.late_minutes,
        undertime_minutes: day.undertime_minutes,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PunchType, RawTimestamp, Schedule};
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap()
    }

    fn punch(punch_type: PunchType, day: u32, h: u32, m: u32) -> PunchRecord {
        PunchRecord::at(
            punch_type,
            Utc.with_ymd_and_hms(2026, 1, day, h, m, 0).unwrap(),
        )
    }

    // ==========================================================================
    // Scenario: simple day. Schedule 09:00-18:00 UTC; in 08:50, out 17:30.
    // ==========================================================================
    #[test]
    fn test_simple_day_summary() {
        let records = vec![
            punch(PunchType::In, 15, 8, 50),
            punch(PunchType::Out, 15, 17, 30),
        ];
        let summary =
            build_daily_summary("user_001", date(), &records, &UserProfile::default(), generated());

        assert_eq!(summary.total_worked_hours, dec("8.67"));
        assert_eq!(summary.regular_hours, dec("8.50"));
        assert_eq!(summary.overtime_hours, dec("0.17"));
        assert_eq!(summary.night_diff_hours, dec("0.00"));
        assert_eq!(summary.late_minutes, 0);
        assert_eq!(summary.undertime_minutes, 30);
        assert_eq!(summary.timezone, "UTC");
    }

    // ==========================================================================
    // Scenario: open punch. In 20:00 only; the interval closes at the local
    // end of day and totals roughly four hours.
    // ==========================================================================
    #[test]
    fn test_open_punch_closes_at_end_of_day() {
        let records = vec![punch(PunchType::In, 15, 20, 0)];
        let summary =
            build_daily_summary("user_001", date(), &records, &UserProfile::default(), generated());

        assert_eq!(summary.total_worked_hours, dec("4.00"));
        // 20:00-23:59:59.999 overlaps the night window from 22:00.
        assert_eq!(summary.night_diff_hours, dec("2.00"));
    }

    // ==========================================================================
    // Scenario: night differential spanning midnight. In 21:00, out 07:00
    // next day, schedule 09:00-18:00.
    // ==========================================================================
    #[test]
    fn test_night_differential_spanning_midnight() {
        let records = vec![
            punch(PunchType::In, 15, 21, 0),
            punch(PunchType::Out, 16, 7, 0),
        ];
        let summary =
            build_daily_summary("user_001", date(), &records, &UserProfile::default(), generated());

        assert_eq!(summary.total_worked_hours, dec("10.00"));
        assert_eq!(summary.regular_hours, dec("0.00"));
        assert_eq!(summary.overtime_hours, dec("10.00"));
        assert_eq!(summary.night_diff_hours, dec("8.00"));
    }

    // ==========================================================================
    // Scenario: unmatched out. A lone clock-out yields an all-zero summary.
    // ==========================================================================
    #[test]
    fn test_unmatched_out_yields_zero_summary() {
        let records = vec![punch(PunchType::Out, 15, 9, 0)];
        let summary =
            build_daily_summary("user_001", date(), &records, &UserProfile::default(), generated());

        assert_eq!(summary.total_worked_hours, Decimal::ZERO.round_dp(2));
        assert_eq!(summary.regular_hours, Decimal::ZERO.round_dp(2));
        assert_eq!(summary.overtime_hours, Decimal::ZERO.round_dp(2));
        assert_eq!(summary.night_diff_hours, Decimal::ZERO.round_dp(2));
        assert_eq!(summary.late_minutes, 0);
        assert_eq!(summary.undertime_minutes, 0);
    }

    #[test]
    fn test_malformed_punch_dropped_rest_computed() {
        let records = vec![
            PunchRecord {
                punch_type: PunchType::In,
                timestamp: Some(RawTimestamp::Text("garbage".to_string())),
            },
            punch(PunchType::In, 15, 9, 0),
            punch(PunchType::Out, 15, 18, 0),
        ];
        let summary =
            build_daily_summary("user_001", date(), &records, &UserProfile::default(), generated());
        assert_eq!(summary.total_worked_hours, dec("9.00"));
        assert_eq!(summary.regular_hours, dec("9.00"));
    }

    #[test]
    fn test_recomputation_is_byte_identical() {
        let records = vec![
            punch(PunchType::In, 15, 8, 50),
            punch(PunchType::Out, 15, 17, 30),
        ];
        let profile = UserProfile::default();
        let first = build_daily_summary("user_001", date(), &records, &profile, generated());
        let second = build_daily_summary("user_001", date(), &records, &profile, generated());
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_profile_timezone_shifts_the_day() {
        // 01:00 UTC is 09:00 in Manila; a 9-hour shift lands fully in
        // schedule for a Manila profile.
        let profile = UserProfile {
            name: Some("Alex Reyes".to_string()),
            timezone: "Asia/Manila".to_string(),
            schedule: Schedule::default(),
        };
        let records = vec![
            punch(PunchType::In, 15, 1, 0),
            punch(PunchType::Out, 15, 10, 0),
        ];
        let summary = build_daily_summary("user_001", date(), &records, &profile, generated());

        assert_eq!(summary.timezone, "Asia/Manila");
        assert_eq!(summary.user_name.as_deref(), Some("Alex Reyes"));
        assert_eq!(summary.regular_hours, dec("9.00"));
        assert_eq!(summary.late_minutes, 0);
        assert_eq!(summary.undertime_minutes, 0);
    }

    #[test]
    fn test_no_punches_all_zero() {
        let summary =
            build_daily_summary("user_001", date(), &[], &UserProfile::default(), generated());
        assert_eq!(summary.total_worked_hours, Decimal::ZERO.round_dp(2));
        assert_eq!(summary.late_minutes, 0);
        assert_eq!(summary.undertime_minutes, 0);
    }
}
