//! Punch event models and timestamp normalization.
//!
//! Punch records arrive from the ingestion collaborator with timestamps in
//! one of several encodings. [`RawTimestamp`] is an explicit sum type over
//! the supported encodings; [`RawTimestamp::to_instant`] converts each
//! variant to a canonical UTC instant. A record whose timestamp fails to
//! normalize is dropped by the computation, never a hard error.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The direction of a punch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    /// A clock-in event.
    In,
    /// A clock-out event.
    Out,
}

/// A punch timestamp in one of the supported wire encodings.
///
/// Variants are tried in declaration order during deserialization: the
/// epoch pair first (an object), then a canonical RFC 3339 instant, then an
/// arbitrary string left for [`RawTimestamp::to_instant`] to parse.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RawTimestamp;
///
/// let ts: RawTimestamp = serde_json::from_str(r#"{"seconds": 1700000000, "nanos": 0}"#).unwrap();
/// assert!(ts.to_instant().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// An epoch seconds + nanoseconds pair.
    Epoch {
        /// Seconds since the Unix epoch.
        seconds: i64,
        /// Nanosecond component.
        #[serde(default)]
        nanos: u32,
    },
    /// An already-canonical UTC instant.
    Instant(DateTime<Utc>),
    /// A timestamp string, expected to be ISO-8601.
    Text(String),
}

impl RawTimestamp {
    /// Converts this raw timestamp to a canonical UTC instant.
    ///
    /// Returns `None` when the value is unparseable; the owning punch is
    /// then dropped from the computation.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::RawTimestamp;
    ///
    /// let ts = RawTimestamp::Text("2026-01-15T09:00:00Z".to_string());
    /// assert!(ts.to_instant().is_some());
    ///
    /// let bad = RawTimestamp::Text("not a timestamp".to_string());
    /// assert!(bad.to_instant().is_none());
    /// ```
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            RawTimestamp::Epoch { seconds, nanos } => DateTime::from_timestamp(*seconds, *nanos),
            RawTimestamp::Instant(instant) => Some(*instant),
            RawTimestamp::Text(text) => parse_text_timestamp(text),
        }
    }
}

/// Parses an ISO-8601 timestamp string, treating zone-less values as UTC.
fn parse_text_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// A raw punch record as produced by the ingestion collaborator.
///
/// Consumed read-only by the engine. The timestamp is optional because
/// partially malformed records do exist upstream; such records are dropped
/// during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// Whether this punch is a clock-in or a clock-out.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// The raw timestamp, if present.
    pub timestamp: Option<RawTimestamp>,
}

impl PunchRecord {
    /// Creates a punch record carrying a canonical UTC instant.
    pub fn at(punch_type: PunchType, instant: DateTime<Utc>) -> Self {
        Self {
            punch_type,
            timestamp: Some(RawTimestamp::Instant(instant)),
        }
    }
}
