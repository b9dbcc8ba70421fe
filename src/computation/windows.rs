//! Schedule and night-differential window resolution.
//!
//! For a given user, local calendar date and timezone this module derives
//! the two closed intervals all classification arithmetic runs against: the
//! scheduled shift window (end shifted one day forward when configured
//! end <= start) and the fixed 22:00-06:00 night-differential window, which
//! always crosses midnight and is independent of the user's schedule.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::models::Schedule;

/// Local start of the night-differential window.
fn night_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).expect("valid constant time")
}

/// Local end of the night-differential window (on the following day).
fn night_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).expect("valid constant time")
}

/// A timezone-aware interval used for overlap arithmetic.
///
/// Invariant: `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// The instant the window opens.
    pub start: DateTime<Tz>,
    /// The instant the window closes.
    pub end: DateTime<Tz>,
}

/// The two windows a day's work intervals are classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindows {
    /// The user's scheduled shift for the date.
    pub schedule: TimeWindow,
    /// The fixed 22:00-06:00 night-differential window for the date.
    pub night: TimeWindow,
}

/// Anchors a naive local datetime in a timezone.
///
/// DST-ambiguous wall times resolve to the earliest instant. Wall times
/// skipped by a DST gap have no local representation; they are anchored as
/// if the zone had no offset, which keeps the function total and
/// deterministic.
pub fn local_datetime(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz.from_utc_datetime(&naive),
    }
}

/// Returns the last representable instant of the local calendar date
/// (23:59:59.999 local), used to close a still-open work interval.
pub fn end_of_day(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let last_moment = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid end-of-day time");
    local_datetime(tz, last_moment)
}

/// Resolves the schedule and night-differential windows for a date.
///
/// # Example
///
/// ```
/// use attendance_engine::computation::resolve_windows;
/// use attendance_engine::models::Schedule;
/// use chrono::NaiveDate;
/// use chrono_tz::Tz;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let windows = resolve_windows(date, Tz::UTC, &Schedule::default());
/// assert_eq!(windows.schedule.end - windows.schedule.start, chrono::Duration::hours(9));
/// assert_eq!(windows.night.end - windows.night.start, chrono::Duration::hours(8));
/// ```
pub fn resolve_windows(date: NaiveDate, tz: Tz, schedule: &Schedule) -> DayWindows {
    let (start_local, end_local) = schedule.resolved_times();

    let sched_start = local_datetime(tz, date.and_time(start_local));
    let mut sched_end = local_datetime(tz, date.and_time(end_local));
    if sched_end <= sched_start {
        // Shift crosses midnight.
        sched_end = local_datetime(tz, date.and_time(end_local) + Duration::days(1));
    }

    let night_start = local_datetime(tz, date.and_time(night_start_time()));
    let night_end = local_datetime(tz, date.and_time(night_end_time()) + Duration::days(1));

    DayWindows {
        schedule: TimeWindow {
            start: sched_start,
            end: sched_end,
        },
        night: TimeWindow {
            start: night_start,
            end: night_end,
        },
    }
}
