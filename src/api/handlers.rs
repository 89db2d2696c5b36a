//! HTTP request handlers for the payroll API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_with_audit;
use crate::models::AuditTrace;

use super::request::ComputeRequest;
use super::response::{ApiError, ApiErrorResponse, ComputeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for POST /compute endpoint.
///
/// Accepts a gross monthly income and returns the deductions and net pay.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let request = match payload {
        Ok(Json(req)) => req,
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
            return json_response(StatusCode::BAD_REQUEST, Json(error));
        }
    };

    let gross = match request.gross_monthly_income.to_money() {
        Ok(gross) => gross,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected income");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    match compute_with_audit(gross) {
        Ok(calculation) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                gross = %gross,
                final_net_pay = %calculation.result.final_net_pay,
                duration_us,
                "Computation completed successfully"
            );

            let audit_trace = state.config().include_audit_trace.then(|| AuditTrace {
                steps: calculation.audit_steps,
                warnings: calculation.warnings,
                duration_us,
            });

            let body = ComputeResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                gross_monthly_income: gross,
                tax_exempt: calculation.result.is_tax_exempt(),
                result: calculation.result,
                audit_trace,
            };
            json_response(StatusCode::OK, Json(body))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Computation failed"
            );
            error_response(err.into())
        }
    }
}

fn json_response(status: StatusCode, body: impl IntoResponse) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, Json(api_error.error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{body::Body, http::Request};
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_router_for_test(include_audit_trace: bool) -> Router {
        let config = ServerConfig {
            include_audit_trace,
            ..ServerConfig::default()
        };
        create_router(AppState::new(config))
    }

    async fn post_compute(router: Router, body: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let (status, body) = post_compute(
            create_router_for_test(true),
            r#"{"gross_monthly_income": "25000.00"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: ComputeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.gross_monthly_income, dec!(25000.00));
        assert_eq!(response.result.final_net_pay, dec!(22786.60));
        assert!(!response.tax_exempt);
        let trace = response.audit_trace.unwrap();
        assert_eq!(trace.steps.len(), 5);
        assert!(trace.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_audit_trace_can_be_disabled() {
        let (status, body) = post_compute(
            create_router_for_test(false),
            r#"{"gross_monthly_income": 10000}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("audit_trace").is_none());
        assert_eq!(json["tax_exempt"], true);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_compute(create_router_for_test(true), "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_income_returns_validation_error() {
        let (status, body) = post_compute(create_router_for_test(true), "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_non_numeric_income_returns_400() {
        let (status, body) = post_compute(
            create_router_for_test(true),
            r#"{"gross_monthly_income": "lots"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT_FORMAT");
    }

    #[tokio::test]
    async fn test_negative_income_returns_400() {
        let (status, body) = post_compute(
            create_router_for_test(true),
            r#"{"gross_monthly_income": "-500"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_MATCHING_BRACKET");
    }
}
