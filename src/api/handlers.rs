//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::PayrollCalculator;
use crate::error::PayrollError;
use crate::policy::{PolicySettings, SettingRow};

use super::request::{CalculationRequest, PolicyReloadRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/policy/reload", post(reload_policy_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Runs the payroll calculation against the cached policy settings and
/// the datasets carried in the request body.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    // Fail fast when the policy cache is unset; there is deliberately no
    // second defaults path here.
    let Some(settings) = state.policy() else {
        warn!(correlation_id = %correlation_id, "Calculation refused: policy not loaded");
        let api_error: ApiErrorResponse = PayrollError::PolicyNotLoaded.into();
        return error_response(api_error);
    };

    let (store, period, selection) = request.into_store();
    let calculator = PayrollCalculator::new(settings);

    match calculator.calculate(&store, &period, &selection) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run.run_id,
                rows = run.results.len(),
                warnings = run.warnings.len(),
                "Calculation completed successfully"
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
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /policy/reload.
///
/// Replaces the cached policy settings from the flat settings table
/// carried in the request body.
async fn reload_policy_handler(
    State(state): State<AppState>,
    payload: Result<Json<PolicyReloadRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing policy reload request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let rows: Vec<SettingRow> = request.settings.into_iter().map(Into::into).collect();

    match PolicySettings::from_rows(&rows) {
        Ok(settings) => {
            state.reload_policy(settings);
            info!(correlation_id = %correlation_id, "Policy settings reloaded");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(settings),
            )
                .into_response()
        }
        Err(err) => {
            // The previous cached settings stay in effect on failure.
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Policy reload failed"
            );
            error_response(err.into())
        }
    }
}

fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
