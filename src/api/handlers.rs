//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::leave::{ApplicationFilter, create_application, leave_balance};
use crate::models::{CreateApplicationInput, EmployeeDirectory, LeaveApplication};

use super::request::{BusinessDaysRequest, EligibilityRequest, RejectRequest, ReviewRequest};
use super::response::{ApiError, ApiErrorResponse, HolidayResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/:date", get(holiday_handler))
        .route("/business-days", post(business_days_handler))
        .route("/eligibility", post(eligibility_handler))
        .route("/employees/:id/eligibility", get(employee_eligibility_handler))
        .route("/employees/:id/balance", get(employee_balance_handler))
        .route(
            "/applications",
            post(create_application_handler).get(list_applications_handler),
        )
        .route("/applications/:id", get(get_application_handler))
        .route("/applications/:id/approve", post(approve_handler))
        .route("/applications/:id/reject", post(reject_handler))
        .route("/applications/:id/cancel", post(cancel_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
    };
    Err(error_response(ApiErrorResponse::bad_request(error)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("Invalid date '{}', expected YYYY-MM-DD", raw),
        )))
    })
}

fn parse_application_id(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| {
        error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("Invalid application id '{}'", raw),
        )))
    })
}

/// Handler for GET /holidays/:date.
async fn holiday_handler(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let date = match parse_date(&raw) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let lookup = state.config().work_calendar().holidays().is_holiday(date);
    json_response(StatusCode::OK, HolidayResponse { date, lookup })
}

/// Handler for POST /business-days.
///
/// Returns the day breakdown of an inclusive range. A reversed range is not
/// an error; it simply has no days.
async fn business_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let breakdown = state
        .config()
        .work_calendar()
        .breakdown(request.start_date, request.end_date);
    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        business_days = breakdown.business_days,
        duration_us = start_time.elapsed().as_micros(),
        "Business days counted"
    );

    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /eligibility.
async fn eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.config().policy().resolve(
        &request.nationality,
        request.join_date,
        request.years_of_service,
    );
    info!(
        correlation_id = %correlation_id,
        nationality = %request.nationality,
        status = %result.status,
        eligible = result.is_eligible(),
        entitled_days = result.entitled_days,
        "Eligibility resolved"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for GET /employees/:id/eligibility.
async fn employee_eligibility_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let config = state.config();
    let employee = match config.get_employee(&employee_id) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(employee_id = %employee_id, "Employee not found");
            return error_response(err.into());
        }
    };

    let result = config.policy().resolve(
        &employee.nationality,
        employee.join_date,
        employee.years_of_service,
    );
    json_response(StatusCode::OK, result)
}

/// Handler for GET /employees/:id/balance.
async fn employee_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let config = state.config();
    let employee = match config.get_employee(&employee_id) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(employee_id = %employee_id, "Employee not found");
            return error_response(err.into());
        }
    };

    let store = state.store().read().await;
    let balance = leave_balance(employee, config.policy(), store.all());
    json_response(StatusCode::OK, balance)
}

/// Handler for POST /applications.
///
/// Validates and stores a new leave application. Field and range errors are
/// reported before the employee is looked up in the directory, and the
/// store lock is only taken to append the validated record.
async fn create_application_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateApplicationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave application");

    let input = match parse_body(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let config = state.config();
    let application = match create_application(
        input,
        config.work_calendar(),
        config.application_rules(),
        Utc::now(),
    ) {
        Ok(application) => application,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                validation = err.is_validation(),
                "Leave application rejected"
            );
            return error_response(err.into());
        }
    };

    if config.directory().find(&application.employee_id).is_none() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %application.employee_id,
            "Employee not found"
        );
        return error_response(
            EngineError::EmployeeNotFound {
                id: application.employee_id,
            }
            .into(),
        );
    }

    let application = state.store().write().await.insert(application);
    info!(
        correlation_id = %correlation_id,
        application_id = %application.id,
        total_calendar_days = application.total_calendar_days,
        business_days = application.business_days,
        excluded_days = application.excluded_days(),
        duration_us = start_time.elapsed().as_micros(),
        "Leave application created"
    );
    json_response(StatusCode::CREATED, application)
}

/// Handler for GET /applications.
async fn list_applications_handler(
    State(state): State<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Response {
    let store = state.store().read().await;
    json_response(StatusCode::OK, store.list(&filter))
}

/// Handler for GET /applications/:id.
async fn get_application_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Response {
    let id = match parse_application_id(&raw) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let store = state.store().read().await;
    match store.get(id) {
        Ok(application) => json_response(StatusCode::OK, application),
        Err(err) => error_response(err.into()),
    }
}

/// Handler for POST /applications/:id/approve.
async fn approve_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (id, request) = match (
        parse_application_id(&raw),
        parse_body(payload, correlation_id),
    ) {
        (Ok(id), Ok(request)) => (id, request),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let result = state.store().write().await.approve(id, &request.actor);
    transition_response(result, correlation_id)
}

/// Handler for POST /applications/:id/reject.
async fn reject_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<RejectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (id, request) = match (
        parse_application_id(&raw),
        parse_body(payload, correlation_id),
    ) {
        (Ok(id), Ok(request)) => (id, request),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let result = state
        .store()
        .write()
        .await
        .reject(id, &request.actor, &request.reason);
    transition_response(result, correlation_id)
}

/// Handler for POST /applications/:id/cancel.
async fn cancel_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (id, request) = match (
        parse_application_id(&raw),
        parse_body(payload, correlation_id),
    ) {
        (Ok(id), Ok(request)) => (id, request),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let result = state.store().write().await.cancel(id, &request.actor);
    transition_response(result, correlation_id)
}

fn transition_response(
    result: EngineResult<LeaveApplication>,
    correlation_id: Uuid,
) -> Response {
    match result {
        Ok(application) => {
            info!(
                correlation_id = %correlation_id,
                application_id = %application.id,
                status = %application.status,
                "Leave application updated"
            );
            json_response(StatusCode::OK, application)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                validation = err.is_validation(),
                "Leave application update refused"
            );
            error_response(err.into())
        }
    }
}
