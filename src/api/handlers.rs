//! HTTP request handlers for the Appraisal Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{allocate_bonus, appraise_employee};
use crate::models::EmployeeId;

use super::request::{AppraisalQuery, BonusCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bonus-calculation", post(bonus_calculation_handler))
        .route("/employees/:employee_id/appraisal", get(appraisal_handler))
        .with_state(state)
}

/// Handler for POST /bonus-calculation.
///
/// Distributes the requested pool across all active employees and returns the
/// full allocation run.
async fn bonus_calculation_handler(
    State(state): State<AppState>,
    payload: Result<Json<BonusCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(json_rejection_error(correlation_id, rejection))
                .into_response();
        }
    };

    let bonus_request = match request.into_bonus_request() {
        Ok(req) => req,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid bonus pool");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match allocate_bonus(state.records(), &bonus_request, state.config()) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %run.calculation_id,
                period = %run.period_under_review,
                employees = run.totals.employee_count,
                warnings = run.totals.warning_count,
                total_allocated = %run.totals.total_allocated,
                duration_us = run.audit_trace.duration_us,
                "Bonus calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(run),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bonus calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/{id}/appraisal?period=...
///
/// Returns the overall appraisal of one employee for a review period.
async fn appraisal_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<AppraisalQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Path(employee_id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid employee id");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id,
        "Processing appraisal request"
    );

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let today = Utc::now().date_naive();
    match appraise_employee(
        state.records(),
        employee_id,
        &query.period,
        state.config().config(),
        today,
    ) {
        Ok(appraisal) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(appraisal),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id,
                error = %err,
                "Appraisal failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    }
}
