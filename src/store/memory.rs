//! In-memory store implementations.
//!
//! Back the demo binary and the test suite. Each store is a `RwLock`-guarded
//! map; real deployments substitute document-database-backed implementations
//! of the same traits.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::models::{DailySummary, PunchRecord, UserProfile, WeeklyReport};

use super::{ProfileSource, PunchSource, SummaryStore};

/// In-memory punch records keyed by (user, date).
#[derive(Debug, Default)]
pub struct MemoryPunchStore {
    punches: RwLock<HashMap<(String, NaiveDate), Vec<PunchRecord>>>,
}

impl MemoryPunchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a punch record for a user-date.
    pub fn record(&self, user_id: &str, date: NaiveDate, punch: PunchRecord) {
        self.punches
            .write()
            .expect("punch store lock poisoned")
            .entry((user_id.to_string(), date))
            .or_default()
            .push(punch);
    }
}

impl PunchSource for MemoryPunchStore {
    fn punches_for(&self, user_id: &str, date: NaiveDate) -> Vec<PunchRecord> {
        self.punches
            .read()
            .expect("punch store lock poisoned")
            .get(&(user_id.to_string(), date))
            .cloned()
            .unwrap_or_default()
    }
}

/// In-memory user profiles keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user's profile.
    pub fn insert(&self, user_id: &str, profile: UserProfile) {
        self.profiles
            .write()
            .expect("profile store lock poisoned")
            .insert(user_id.to_string(), profile);
    }
}

impl ProfileSource for MemoryProfileStore {
    fn profile_for(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles
            .read()
            .expect("profile store lock poisoned")
            .get(user_id)
            .cloned()
    }
}

/// In-memory summaries and weekly reports.
#[derive(Debug, Default)]
pub struct MemorySummaryStore {
    daily: RwLock<HashMap<(String, NaiveDate), DailySummary>>,
    weekly: RwLock<HashMap<(String, NaiveDate), WeeklyReport>>,
}

impl MemorySummaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored weekly report for a (scope, week start) key.
    pub fn weekly_report(&self, scope: &str, week_start: NaiveDate) -> Option<WeeklyReport> {
        self.weekly
            .read()
            .expect("summary store lock poisoned")
            .get(&(scope.to_string(), week_start))
            .cloned()
    }
}

impl SummaryStore for MemorySummaryStore {
    fn upsert_daily(&self, summary: DailySummary) {
        self.daily
            .write()
            .expect("summary store lock poisoned")
            .insert((summary.user_id.clone(), summary.date), summary);
    }

    fn daily_for_date(&self, date: NaiveDate) -> Vec<DailySummary> {
        let mut summaries: Vec<DailySummary> = self
            .daily
            .read()
            .expect("summary store lock poisoned")
            .values()
            .filter(|s| s.date == date)
            .cloned()
            .collect();
        summaries.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        summaries
    }

    fn daily_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Option<&str>,
    ) -> Vec<DailySummary> {
        let mut summaries: Vec<DailySummary> = self
            .daily
            .read()
            .expect("summary store lock poisoned")
            .values()
            .filter(|s| s.date >= start && s.date <= end)
            .filter(|s| user_id.is_none_or(|u| s.user_id == u))
            .cloned()
            .collect();
        summaries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.user_id.cmp(&b.user_id)));
        summaries
    }

    fn upsert_weekly(&self, report: WeeklyReport) {
        self.weekly
            .write()
            .expect("summary store lock poisoned")
            .insert((report.user_id.clone(), report.week_start), report);
    }
}
