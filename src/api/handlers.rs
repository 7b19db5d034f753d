//! HTTP request handlers for the paystub engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_history, calculate_paystub};
use crate::config::EmploymentConfigInput;
use crate::error::{EngineError, EngineResult};
use crate::export::{generate_markdown, statement_file_stem, validate_statement_count};
use crate::models::EmploymentConfiguration;

use super::request::{CalculationRequest, StatementsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/configuration",
            get(get_configuration_handler).put(put_configuration_handler),
        )
        .route("/calculate", post(calculate_handler))
        .route("/statements", post(statements_handler))
        .route("/markdown", post(markdown_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description (missing field, unknown variant...)
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn failure_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Uses the request's configuration if present, else the stored one.
async fn resolve_configuration(
    state: &AppState,
    input: Option<EmploymentConfigInput>,
) -> EngineResult<EmploymentConfiguration> {
    match input {
        Some(input) => input.into_configuration(),
        None => Ok(state.configuration().await),
    }
}

/// Handler for GET /configuration.
async fn get_configuration_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.configuration().await)).into_response()
}

/// Handler for PUT /configuration.
///
/// Validates the submitted configuration and replaces the stored one.
async fn put_configuration_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmploymentConfigInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing configuration update");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match input.into_configuration() {
        Ok(configuration) => {
            state.replace_configuration(configuration.clone()).await;
            info!(
                correlation_id = %correlation_id,
                employee_id = %configuration.employee_id,
                pay_date = %configuration.pay_date,
                "Configuration replaced"
            );
            (StatusCode::OK, Json(configuration)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /calculate.
///
/// Returns the statement `offset_periods` periods before the pay date.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let offset_periods = request.offset_periods;
    let result = resolve_configuration(&state, request.configuration)
        .await
        .and_then(|config| calculate_paystub(&config, offset_periods));

    match result {
        Ok(paystub) => {
            info!(
                correlation_id = %correlation_id,
                offset_periods,
                check_number = paystub.check_number,
                gross_pay = %paystub.gross_pay_current,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(paystub)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /statements.
///
/// Returns the `count` most recent statements, most recent first.
async fn statements_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statements request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let count = request.count;
    let result = match validate_statement_count(count) {
        Ok(()) => resolve_configuration(&state, request.configuration)
            .await
            .and_then(|config| calculate_history(&config, count)),
        Err(err) => Err(err),
    };

    match result {
        Ok(statements) => {
            info!(
                correlation_id = %correlation_id,
                count,
                duration_us = start_time.elapsed().as_micros(),
                "Statements calculated"
            );
            (StatusCode::OK, Json(statements)).into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /markdown.
///
/// Returns the statement as a Markdown attachment named after the employee.
async fn markdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing markdown request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let offset_periods = request.offset_periods;
    let result = resolve_configuration(&state, request.configuration)
        .await
        .and_then(|config| {
            let paystub = calculate_paystub(&config, offset_periods)?;
            let stem = statement_file_stem(&config.employee_name);
            let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}.md\"", stem))
                .map_err(|e| EngineError::ExportError {
                    message: format!("invalid file name '{}': {}", stem, e),
                })?;
            Ok((disposition, generate_markdown(&config, &paystub)))
        });

    match result {
        Ok((disposition, markdown)) => {
            info!(
                correlation_id = %correlation_id,
                offset_periods,
                bytes = markdown.len(),
                "Markdown statement rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(MARKDOWN_CONTENT_TYPE)),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                markdown,
            )
                .into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}
