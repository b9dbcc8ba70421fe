//! Request types for the Attendance Summary Engine API.
//!
//! Dates are deserialized as ISO calendar dates but kept optional so the
//! handlers can surface the engine's missing-input errors (`date required`,
//! `weekStart required`) instead of a generic serde message, matching the
//! collaborator contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/computeSummary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The user to compute a summary for.
    pub user_id: String,
    /// The local calendar date to compute. Required; optional here only so
    /// its absence maps to the documented error.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for the `/admin/dailyReport` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportRequest {
    /// The date to report on. Required.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for the `/admin/weeklyReport` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReportRequest {
    /// Limit the report to one user; omit for everyone.
    #[serde(default)]
    pub user_id: Option<String>,
    /// The first date of the week. Required.
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_summary_request() {
        let json = r#"{"user_id": "user_001", "date": "2026-01-15"}"#;
        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "user_001");
        assert_eq!(
            request.date,
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_summary_request_date_is_optional() {
        let json = r#"{"user_id": "user_001"}"#;
        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert!(request.date.is_none());
    }

    #[test]
    fn test_summary_request_user_id_is_required() {
        let json = r#"{"date": "2026-01-15"}"#;
        assert!(serde_json::from_str::<SummaryRequest>(json).is_err());
    }

    #[test]
    fn test_deserialize_weekly_report_request_without_user() {
        let json = r#"{"week_start": "2026-01-12"}"#;
        let request: WeeklyReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.user_id.is_none());
        assert_eq!(
            request.week_start,
            Some(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
        );
    }

    #[test]
    fn test_deserialize_daily_report_request() {
        let json = r#"{"date": "2026-01-15"}"#;
        let request: DailyReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.date.is_some());
    }
}
