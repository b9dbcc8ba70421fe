//! Punch timestamp normalization.
//!
//! Converts the heterogeneous raw punch records handed over by the
//! ingestion collaborator into a chronologically sorted list of
//! timezone-anchored punches. Records with missing or unparseable
//! timestamps are dropped here; the rest of the computation proceeds with
//! whatever survives.

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::models::{PunchRecord, PunchType};

/// A punch anchored in the user's local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPunch {
    /// Whether this punch is a clock-in or a clock-out.
    pub punch_type: PunchType,
    /// The punch instant in the user's timezone.
    pub at: DateTime<Tz>,
}

/// Normalizes raw punch records into sorted local punches.
///
/// Each record's timestamp is converted to a canonical UTC instant and then
/// anchored in `tz`; records that fail to normalize are dropped. The result
/// is sorted by instant, ascending, regardless of input order.
///
/// # Example
///
/// ```
/// use attendance_engine::computation::normalize_punches;
/// use attendance_engine::models::{PunchRecord, PunchType, RawTimestamp};
/// use chrono_tz::Tz;
///
/// let records = vec![
///     PunchRecord {
///         punch_type: PunchType::Out,
///         timestamp: Some(RawTimestamp::Text("2026-01-15T17:30:00Z".into())),
///     },
///     PunchRecord { punch_type: PunchType::In, timestamp: None },
///     PunchRecord {
///         punch_type: PunchType::In,
///         timestamp: Some(RawTimestamp::Text("2026-01-15T08:50:00Z".into())),
///     },
/// ];
///
/// let punches = normalize_punches(&records, Tz::UTC);
/// assert_eq!(punches.len(), 2);
/// assert_eq!(punches[0].punch_type, PunchType::In);
/// ```
pub fn normalize_punches(records: &[PunchRecord], tz: Tz) -> Vec<LocalPunch> {
    let mut punches: Vec<LocalPunch> = records
        .iter()
        .filter_map(|record| {
            let instant = match record.timestamp.as_ref().and_then(|ts| ts.to_instant()) {
                Some(instant) => instant,
                None => {
                    debug!(punch_type = ?record.punch_type, "dropping punch with unusable timestamp");
                    return None;
                }
            };
            Some(LocalPunch {
                punch_type: record.punch_type,
                at: instant.with_timezone(&tz),
            })
        })
        .collect();

    punches.sort_by(|a, b| a.at.cmp(&b.at));
    punches
}
