//! HTTP request handlers for the ESB Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{current_snapshot, monthly_accrual_schedule, snapshot_as_of};
use crate::models::Employee;

use super::request::{ProvisionScheduleRequest, SnapshotRequest};
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/snapshot", post(snapshot_handler))
        .route("/provision-schedule", post(provision_schedule_handler))
}

/// Handler for POST /snapshot.
///
/// Computes a liability snapshot for one employee, either as of the
/// server's current date (default, termination-date override applies) or
/// as of an explicitly supplied historical date.
async fn snapshot_handler(
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing snapshot request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee: Employee = request.employee.into();
    if let Err(err) = employee.validate() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            error = %err,
            "Employee record rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // The only place the wall clock is read; the calculators take explicit
    // dates.
    let snapshot = match request.as_of_date {
        Some(as_of) => snapshot_as_of(&employee, as_of),
        None => current_snapshot(&employee, Utc::now().date_naive()),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %snapshot.employee_id,
        total_liability = %snapshot.total_liability,
        "Snapshot computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(snapshot),
    )
        .into_response()
}

/// Handler for POST /provision-schedule.
///
/// Reconstructs month-end liability snapshots and per-month accruals for
/// one employee across the requested month ends.
async fn provision_schedule_handler(
    payload: Result<Json<ProvisionScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing provision schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee: Employee = request.employee.into();
    if let Err(err) = employee.validate() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            error = %err,
            "Employee record rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let schedule = monthly_accrual_schedule(&employee, &request.month_ends);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        months = schedule.len(),
        "Provision schedule computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(schedule),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a structured error response.
fn rejection_response(
    rejection: JsonRejection,
    correlation_id: Uuid,
) -> axum::response::Response {
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
