//! Work interval reconstruction from punch events.
//!
//! Pairs a sorted sequence of punches into contiguous worked spans. The
//! pairing is a simple alternation scan: only the most recent unmatched
//! clock-in survives, an unmatched clock-out is discarded, and a trailing
//! open clock-in is closed at the local end of day ("still clocked in").

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::PunchType;

use super::normalize::LocalPunch;

/// A reconstructed contiguous worked span.
///
/// Derived during computation and never persisted. Invariant:
/// `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    /// The clock-in instant.
    pub start: DateTime<Tz>,
    /// The matching clock-out instant, or local end-of-day if still open.
    pub end: DateTime<Tz>,
}

impl WorkInterval {
    /// Returns the interval length in fractional hours (millisecond
    /// precision, unrounded).
    pub fn duration_hours(&self) -> Decimal {
        let millis = (self.end - self.start).num_milliseconds();
        Decimal::from(millis) / Decimal::from(3_600_000)
    }
}

/// Builds the ordered work intervals for one user-day.
///
/// `punches` must be sorted by instant ascending (the output of
/// [`normalize_punches`](super::normalize_punches)); `end_of_day` is the
/// local end-of-day instant used to close a trailing open clock-in.
///
/// The output is chronologically ordered and non-overlapping by
/// construction.
///
/// # Example
///
/// ```
/// use attendance_engine::computation::{build_work_intervals, end_of_day, normalize_punches};
/// use attendance_engine::models::{PunchRecord, PunchType, RawTimestamp};
/// use chrono::NaiveDate;
/// use chrono_tz::Tz;
///
/// let records = vec![
///     PunchRecord {
///         punch_type: PunchType::In,
///         timestamp: Some(RawTimestamp::Text("2026-01-15T08:50:00Z".into())),
///     },
///     PunchRecord {
///         punch_type: PunchType::Out,
///         timestamp: Some(RawTimestamp::Text("2026-01-15T17:30:00Z".into())),
///     },
/// ];
/// let punches = normalize_punches(&records, Tz::UTC);
/// let eod = end_of_day(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), Tz::UTC);
///
/// let intervals = build_work_intervals(&punches, eod);
/// assert_eq!(intervals.len(), 1);
/// ```
pub fn build_work_intervals(punches: &[LocalPunch], end_of_day: DateTime<Tz>) -> Vec<WorkInterval> {
    let mut intervals = Vec::new();
    let mut pending_in: Option<DateTime<Tz>> = None;

    for punch in punches {
        match punch.punch_type {
            // A repeated clock-in overwrites the pending one; consecutive
            // ins without an out collapse to the most recent.
            PunchType::In => pending_in = Some(punch.at),
            PunchType::Out => match pending_in.take() {
                Some(start) => intervals.push(WorkInterval {
                    start,
                    end: punch.at,
                }),
                None => {
                    debug!(at = %punch.at, "discarding clock-out with no matching clock-in");
                }
            },
        }
    }

    // Still clocked in: close the open interval at the local end of day.
    if let Some(start) = pending_in {
        intervals.push(WorkInterval {
            start,
            end: end_of_day,
        });
    }

    intervals
}
