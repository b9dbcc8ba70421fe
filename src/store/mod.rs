//! Collaborator seams for the Attendance Summary Engine.
//!
//! The engine itself is a pure computation; punch records, user profiles,
//! persisted summaries and the clock are reached through the traits in this
//! module. Implementations are constructed once at process start and passed
//! into [`AppState`](crate::api::AppState) explicitly, never reached through
//! ambient global state.

mod clock;
mod memory;

use chrono::NaiveDate;

use crate::models::{DailySummary, PunchRecord, UserProfile, WeeklyReport};

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::{MemoryProfileStore, MemoryPunchStore, MemorySummaryStore};

/// Source of raw punch records, keyed by user and local calendar date.
///
/// The ingestion collaborator guarantees per-user-date alternation; the
/// engine still tolerates violations (unmatched outs are discarded).
pub trait PunchSource: Send + Sync {
    /// Returns the punch records for one user on one date, in any order.
    fn punches_for(&self, user_id: &str, date: NaiveDate) -> Vec<PunchRecord>;
}

/// Source of user profiles.
pub trait ProfileSource: Send + Sync {
    /// Returns the profile for a user, or `None` when the directory does
    /// not know them (callers then apply the configured defaults).
    fn profile_for(&self, user_id: &str) -> Option<UserProfile>;
}

/// Persistence for computed summaries and reports.
///
/// One daily summary exists per (user, date) and one weekly report per
/// (scope, week start); writes overwrite. The engine's computations are
/// idempotent, so last-write-wins is acceptable for concurrent
/// recomputation of the same inputs.
pub trait SummaryStore: Send + Sync {
    /// Inserts or replaces the summary for its (user, date) key.
    fn upsert_daily(&self, summary: DailySummary);

    /// Returns all users' summaries for one date.
    fn daily_for_date(&self, date: NaiveDate) -> Vec<DailySummary>;

    /// Returns summaries with dates in `[start, end]`, optionally limited
    /// to one user.
    fn daily_in_range(&self, start: NaiveDate, end: NaiveDate, user_id: Option<&str>)
    -> Vec<DailySummary>;

    /// Inserts or replaces the weekly report for its (scope, week start) key.
    fn upsert_weekly(&self, report: WeeklyReport);
}
