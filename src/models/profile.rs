//! User profile and schedule models.
//!
//! The profile is owned by an external user-directory collaborator; the
//! engine consumes it read-only. Both the timezone and the schedule carry
//! documented defaults (`UTC`, `09:00`-`18:00`) used whenever the profile
//! is absent or its fields fail to parse.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The documented default schedule start.
pub const DEFAULT_SCHEDULE_START: &str = "09:00";
/// The documented default schedule end.
pub const DEFAULT_SCHEDULE_END: &str = "18:00";
/// The documented default timezone.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A user's expected daily shift, as time-of-day strings.
///
/// If the configured end is at or before the start, the shift is
/// interpreted as crossing midnight when the schedule window is resolved
/// for a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Shift start, local time of day ("HH:MM").
    pub start: String,
    /// Shift end, local time of day ("HH:MM").
    pub end: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start: DEFAULT_SCHEDULE_START.to_string(),
            end: DEFAULT_SCHEDULE_END.to_string(),
        }
    }
}

impl Schedule {
    /// Resolves the configured times of day.
    ///
    /// If either value fails to parse the whole schedule falls back to the
    /// documented default rather than failing the computation.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::Schedule;
    /// use chrono::NaiveTime;
    ///
    /// let sched = Schedule { start: "22:00".into(), end: "06:00".into() };
    /// let (start, end) = sched.resolved_times();
    /// assert_eq!(start, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    /// assert_eq!(end, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    /// ```
    pub fn resolved_times(&self) -> (NaiveTime, NaiveTime) {
        match (parse_time_of_day(&self.start), parse_time_of_day(&self.end)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                debug!(
                    start = %self.start,
                    end = %self.end,
                    "invalid schedule configuration, using default"
                );
                default_times()
            }
        }
    }
}

fn default_times() -> (NaiveTime, NaiveTime) {
    // The defaults are compile-time constants in string form; they always parse.
    (
        parse_time_of_day(DEFAULT_SCHEDULE_START).unwrap_or(NaiveTime::MIN),
        parse_time_of_day(DEFAULT_SCHEDULE_END).unwrap_or(NaiveTime::MIN),
    )
}

fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// A user profile as provided by the user-directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, if recorded.
    #[serde(default)]
    pub name: Option<String>,
    /// IANA timezone name (e.g. "Asia/Manila").
    pub timezone: String,
    /// The expected daily shift.
    #[serde(default)]
    pub schedule: Schedule,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
            schedule: Schedule::default(),
        }
    }
}

impl UserProfile {
    /// Resolves the profile's timezone, falling back to UTC when the name
    /// is not a known IANA zone.
    pub fn tz(&self) -> Tz {
        self.timezone.parse::<Tz>().unwrap_or_else(|_| {
            debug!(timezone = %self.timezone, "unknown timezone, using UTC");
            Tz::UTC
        })
    }
}
