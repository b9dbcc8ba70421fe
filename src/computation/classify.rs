//! Work-hour classification.
//!
//! For each work interval the classifier computes its total duration, the
//! overlap with the schedule window (regular hours), the remainder
//! (overtime hours), and the overlap with the night-differential window.
//! Night hours are measured against the raw interval, independent of the
//! regular/overtime split, so the categories are not mutually exclusive: a
//! span worked inside the night window contributes to both.
//!
//! Late and undertime minutes are day-level figures taken from only the
//! first interval's start and the last interval's end; gaps in between are
//! ignored.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

use super::intervals::WorkInterval;
use super::windows::{DayWindows, TimeWindow};

/// The classified hour and minute totals for one user-day.
///
/// Hour fields are rounded to 2 decimal places (half away from zero);
/// minute fields to the nearest integer. A day with no work intervals is
/// all zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayClassification {
    /// Total worked hours across all intervals.
    pub total_hours: Decimal,
    /// Worked hours overlapping the schedule window.
    pub regular_hours: Decimal,
    /// Worked hours outside the schedule window.
    pub overtime_hours: Decimal,
    /// Worked hours overlapping the night-differential window.
    pub night_diff_hours: Decimal,
    /// Minutes the first clock-in trailed the scheduled start.
    pub late_minutes: i64,
    /// Minutes the last clock-out preceded the scheduled end.
    pub undertime_minutes: i64,
}

/// Returns the overlap between a work interval and a window, in fractional
/// hours. Zero when they are disjoint.
pub fn overlap_hours(interval: &WorkInterval, window: &TimeWindow) -> Decimal {
    let start = interval.start.max(window.start);
    let end = interval.end.min(window.end);
    if end > start {
        let millis = (end - start).num_milliseconds();
        Decimal::from(millis) / Decimal::from(3_600_000)
    } else {
        Decimal::ZERO
    }
}

/// Classifies a day's work intervals against its windows.
///
/// # Example
///
/// ```
/// use attendance_engine::computation::{WorkInterval, classify_day, resolve_windows};
/// use attendance_engine::models::Schedule;
/// use chrono::{NaiveDate, TimeZone};
/// use chrono_tz::Tz;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let windows = resolve_windows(date, Tz::UTC, &Schedule::default());
/// let interval = WorkInterval {
///     start: Tz::UTC.with_ymd_and_hms(2026, 1, 15, 8, 50, 0).unwrap(),
///     end: Tz::UTC.with_ymd_and_hms(2026, 1, 15, 17, 30, 0).unwrap(),
/// };
///
/// let day = classify_day(&[interval], &windows);
/// assert_eq!(day.total_hours, Decimal::from_str("8.67").unwrap());
/// assert_eq!(day.undertime_minutes, 30);
/// ```
pub fn classify_day(intervals: &[WorkInterval], windows: &DayWindows) -> DayClassification {
    let mut total = Decimal::ZERO;
    let mut regular = Decimal::ZERO;
    let mut overtime = Decimal::ZERO;
    let mut night = Decimal::ZERO;

    for interval in intervals {
        let duration = interval.duration_hours();
        let regular_overlap = overlap_hours(interval, &windows.schedule);

        total += duration;
        regular += regular_overlap;
        overtime += (duration - regular_overlap).max(Decimal::ZERO);
        night += overlap_hours(interval, &windows.night);
    }

    let (late_minutes, undertime_minutes) = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => {
            let late = if first.start > windows.schedule.start {
                round_minutes((first.start - windows.schedule.start).num_milliseconds())
            } else {
                0
            };
            let undertime = if last.end < windows.schedule.end {
                round_minutes((windows.schedule.end - last.end).num_milliseconds())
            } else {
                0
            };
            (late, undertime)
        }
        _ => (0, 0),
    };

    DayClassification {
        total_hours: round_hours(total),
        regular_hours: round_hours(regular),
        overtime_hours: round_hours(overtime),
        night_diff_hours: round_hours(night),
        late_minutes,
        undertime_minutes,
    }
}

/// Rounds an hour value to 2 decimal places, half away from zero.
fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a millisecond span to the nearest whole minute.
fn round_minutes(millis: i64) -> i64 {
    (Decimal::from(millis) / Decimal::from(60_000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
