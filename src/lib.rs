//! Attendance Summary Engine
//!
//! This crate turns raw employee clock-in/clock-out punches into classified
//! daily and weekly work-hour summaries (regular, overtime, night
//! differential, late and undertime minutes) against a per-user schedule and
//! a fixed 22:00-06:00 night-differential window.

#![warn(missing_docs)]

pub mod api;
pub mod computation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
