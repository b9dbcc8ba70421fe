//! Core data models for the Attendance Summary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod profile;
mod punch;
mod summary;

pub use profile::{Schedule, UserProfile};
pub use punch::{PunchRecord, PunchType, RawTimestamp};
pub use summary::{DailySummary, WeeklyReport, WeeklyTotals};
