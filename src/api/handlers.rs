//! HTTP request handlers for the Attendance Summary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Days;
use tracing::{info, warn};
use uuid::Uuid;

use crate::computation::{WEEK_DAYS, aggregate_weekly, build_daily_summary};
use crate::error::EngineError;
use crate::store::{Clock, PunchSource, SummaryStore};

use super::request::{DailyReportRequest, SummaryRequest, WeeklyReportRequest};
use super::response::{ApiError, ApiErrorResponse, DailyReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/computeSummary", post(compute_summary_handler))
        .route("/admin/dailyReport", post(daily_report_handler))
        .route("/admin/weeklyReport", post(weekly_report_handler))
        .with_state(state)
}

/// Unwraps an extracted JSON payload, mapping axum's rejection into the
/// engine's error body.
fn extract_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /computeSummary.
///
/// Computes the classified daily summary for one user and date, persists it
/// and returns it.
async fn compute_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let Some(date) = request.date else {
        return engine_error_response(EngineError::MissingDate, correlation_id);
    };

    let start_time = Instant::now();
    let profile = state.profile_or_default(&request.user_id);
    let records = state.punches().punches_for(&request.user_id, date);
    let summary = build_daily_summary(
        &request.user_id,
        date,
        &records,
        &profile,
        state.clock().now(),
    );
    state.summaries().upsert_daily(summary.clone());

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        date = %date,
        punches = records.len(),
        total_hours = %summary.total_worked_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Summary computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for POST /admin/dailyReport.
///
/// Returns every stored summary for the requested date.
async fn daily_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily report request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let Some(date) = request.date else {
        return engine_error_response(EngineError::MissingDate, correlation_id);
    };

    let report = state.summaries().daily_for_date(date);
    info!(
        correlation_id = %correlation_id,
        date = %date,
        users = report.len(),
        "Daily report assembled"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(DailyReportResponse { date, report }),
    )
        .into_response()
}

/// Handler for POST /admin/weeklyReport.
///
/// Aggregates the stored daily summaries over the seven days starting at
/// `week_start`, persists the report and returns it.
async fn weekly_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly report request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let Some(week_start) = request.week_start else {
        return engine_error_response(EngineError::MissingWeekStart, correlation_id);
    };

    let week_end = week_start
        .checked_add_days(Days::new(WEEK_DAYS as u64 - 1))
        .unwrap_or(week_start);
    let scope = request.user_id.as_deref();
    let summaries = state.summaries().daily_in_range(week_start, week_end, scope);
    let report = aggregate_weekly(scope, week_start, summaries);
    state.summaries().upsert_weekly(report.clone());

    info!(
        correlation_id = %correlation_id,
        week_start = %week_start,
        scope = %report.user_id,
        days = report.days.len(),
        "Weekly report assembled"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
