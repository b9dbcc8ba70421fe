//! HTTP API module for the Attendance Summary Engine.
//!
//! This module provides the REST endpoints for computing daily summaries
//! and daily/weekly reports. Authentication, authorization and CORS are
//! handled by an upstream gateway and are out of scope here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyReportRequest, SummaryRequest, WeeklyReportRequest};
pub use response::ApiError;
pub use state::AppState;
