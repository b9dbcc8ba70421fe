//! Computation logic for the Attendance Summary Engine.
//!
//! This module contains the attendance-to-summary pipeline: normalizing raw
//! punch timestamps, pairing punches into work intervals, resolving the
//! schedule and night-differential windows for a date, classifying worked
//! hours against those windows, and assembling daily summaries and weekly
//! reports.

mod classify;
mod daily;
mod intervals;
mod normalize;
mod weekly;
mod windows;

pub use classify::{DayClassification, classify_day, overlap_hours};
pub use daily::build_daily_summary;
pub use intervals::{WorkInterval, build_work_intervals};
pub use normalize::{LocalPunch, normalize_punches};
pub use weekly::{WEEK_DAYS, aggregate_weekly};
pub use windows::{DayWindows, TimeWindow, end_of_day, local_datetime, resolve_windows};
