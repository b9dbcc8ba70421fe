//! Error types for the Attendance Summary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine recovers locally from most bad input (malformed punch
//! timestamps are dropped, unmatched out-punches are discarded, invalid
//! schedules fall back to the documented default), so the variants here
//! cover only the conditions that are surfaced to callers.

use thiserror::Error;

/// The main error type for the Attendance Summary Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::MissingDate;
/// assert_eq!(error.to_string(), "date required");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No date was supplied for a daily computation.
    #[error("date required")]
    MissingDate,

    /// No week start date was supplied for a weekly report.
    #[error("weekStart required")]
    MissingWeekStart,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
