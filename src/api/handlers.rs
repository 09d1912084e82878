//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_salary_report, compute_daily_share};
use crate::error::EngineResult;
use crate::models::{CompensationPolicy, SalaryReport, validate_directory};

use super::request::{DailyShareRequest, SalaryReportRequest};
use super::response::{ApiError, ApiErrorResponse, DailyShareResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/policy", get(policy_handler))
        .route("/salary/daily-share", post(daily_share_handler))
        .route("/reports/salary", post(salary_report_handler))
        .with_state(state)
}

/// Handler for GET /policy.
///
/// Returns the compensation policy from the shop configuration.
async fn policy_handler(State(state): State<AppState>) -> Json<CompensationPolicy> {
    Json(state.config().policy().clone())
}

/// Handler for POST /salary/daily-share.
///
/// Computes what each employee on shift earns for a day's revenue.
async fn daily_share_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyShareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily share request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = request.validate() {
        return error_response(err.into(), correlation_id);
    }
    let policy = match resolve_policy(&state, request.policy) {
        Ok(policy) => policy,
        Err(err) => return error_response(err.into(), correlation_id),
    };

    let per_employee_salary =
        compute_daily_share(request.daily_revenue, &policy, request.employees_on_shift);
    let total_payout = per_employee_salary * Decimal::from(request.employees_on_shift as u64);

    info!(
        correlation_id = %correlation_id,
        employees_on_shift = request.employees_on_shift,
        per_employee_salary = %per_employee_salary,
        "Daily share computed"
    );

    json_response(
        StatusCode::OK,
        DailyShareResponse {
            per_employee_salary,
            total_payout,
            policy,
        },
    )
}

/// Handler for POST /reports/salary.
///
/// Builds the salary report for a period from the jobs and roster in the
/// request. The configured policy and employee directory are used unless
/// the request overrides them.
async fn salary_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_report(&state, request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                employees_paid = report.totals.employees_paid,
                total_salaries = %report.totals.total_salaries,
                warnings = report.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Salary report completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(err.into(), correlation_id),
    }
}

/// Validates request overrides and builds the report.
fn perform_report(state: &AppState, request: SalaryReportRequest) -> EngineResult<SalaryReport> {
    let config = state.config();
    request.validate()?;
    let period = request.period.resolve()?;
    let policy = resolve_policy(state, request.policy)?;

    let employees = match request.employees {
        Some(employees) => {
            validate_directory(&employees)?;
            employees
        }
        None => config.employees().to_vec(),
    };

    Ok(build_salary_report(
        period,
        &request.jobs,
        &request.shift_roster,
        &employees,
        config.organizations(),
        &policy,
    ))
}

/// Picks the request's policy if it has one, otherwise the configured policy.
fn resolve_policy(
    state: &AppState,
    requested: Option<CompensationPolicy>,
) -> EngineResult<CompensationPolicy> {
    match requested {
        Some(policy) => {
            policy.validate()?;
            Ok(policy)
        }
        None => Ok(state.config().policy().clone()),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request failed"
    );
    api_error.into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/detail-lab").expect("Failed to load config");
        AppState::new(config)
    }

    async fn send(router: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_get_policy_returns_configured_policy() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/policy", Body::empty()).await;

        assert_eq!(status, StatusCode::OK);
        let policy: CompensationPolicy = serde_json::from_slice(&body).unwrap();
        assert_eq!(policy.method_name(), "min_plus_percent");
    }

    #[tokio::test]
    async fn test_daily_share_uses_configured_policy() {
        let router = create_router(create_test_state());
        // 30% of 10000 / 2 = 1500, not below the 1500 floor: 1500 + 2% of 10000
        let body = r#"{"daily_revenue": "10000", "employees_on_shift": 2}"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::OK);
        let response: DailyShareResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.per_employee_salary, Decimal::new(1700, 0));
        assert_eq!(response.total_payout, Decimal::new(3400, 0));
    }

    #[tokio::test]
    async fn test_daily_share_with_zero_crew() {
        let router = create_router(create_test_state());
        let body = r#"{"daily_revenue": "10000", "employees_on_shift": 0}"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::OK);
        let response: DailyShareResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.per_employee_salary, Decimal::ZERO);
        assert_eq!(response.total_payout, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_daily_share_rejects_invalid_policy_override() {
        let router = create_router(create_test_state());
        let body = r#"{
            "daily_revenue": "1000",
            "employees_on_shift": 1,
            "policy": {"method": "percent", "percent": "120"}
        }"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_POLICY");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) =
            send(router, "POST", "/reports/salary", Body::from("{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_period_returns_validation_error() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "POST", "/reports/salary", Body::from(r#"{"jobs": []}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("period"));
    }

    #[tokio::test]
    async fn test_reversed_period_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"period": {"kind": "custom", "start_date": "2025-03-10", "end_date": "2025-03-01"}}"#;
        let (status, body) = send(router, "POST", "/reports/salary", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_salary_report_with_configured_directory() {
        let router = create_router(create_test_state());
        let body = r#"{
            "period": {"kind": "day", "date": "2025-03-03"},
            "jobs": [
                {"work_day": "2025-03-03", "revenue": "6000"},
                {"work_day": "2025-03-03", "revenue": "4000"}
            ],
            "shift_roster": {"2025-03-03": ["emp_001", "emp_002"]}
        }"#;
        let (status, body) = send(router, "POST", "/reports/salary", Body::from(body)).await;

        assert_eq!(status, StatusCode::OK);
        let report: SalaryReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.summaries[0].employee_name, "Anna Petrova");
        assert_eq!(report.summaries[0].total_salary, Decimal::new(1700, 0));
        assert_eq!(report.summaries[0].total_revenue_attributed, Decimal::new(5000, 0));
    }

    #[tokio::test]
    async fn test_salary_report_rejects_duplicate_employee_override() {
        let router = create_router(create_test_state());
        let body = r#"{
            "period": {"kind": "day", "date": "2025-03-03"},
            "employees": [{"id": "e1", "name": "Anna"}, {"id": "e1", "name": "Boris"}]
        }"#;
        let (status, body) = send(router, "POST", "/reports/salary", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_daily_share_rejects_revenue_out_of_range() {
        let router = create_router(create_test_state());
        let body = r#"{"daily_revenue": "79228162514264337593543950335", "employees_on_shift": 1}"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("daily_revenue"));
    }

    #[tokio::test]
    async fn test_daily_share_rejects_oversized_crew() {
        let router = create_router(create_test_state());
        let body = r#"{"daily_revenue": "1000", "employees_on_shift": 18446744073709551615}"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("employees_on_shift"));
    }

    #[tokio::test]
    async fn test_largest_accepted_inputs_do_not_overflow() {
        let router = create_router(create_test_state());
        let body = r#"{
            "daily_revenue": "1000000000000",
            "employees_on_shift": 10000,
            "policy": {
                "method": "min_plus_percent",
                "percent": "100",
                "minimum_daily_rate": "1000000000000",
                "bonus_percent": "100"
            }
        }"#;
        let (status, body) = send(router, "POST", "/salary/daily-share", Body::from(body)).await;

        assert_eq!(status, StatusCode::OK);
        let response: DailyShareResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.per_employee_salary, Decimal::new(1_000_000_000_000, 0));
        assert_eq!(response.total_payout, Decimal::new(10_000_000_000_000_000, 0));
    }

    #[tokio::test]
    async fn test_salary_report_rejects_job_revenue_out_of_range() {
        let router = create_router(create_test_state());
        let body = r#"{
            "period": {"kind": "day", "date": "2025-03-03"},
            "jobs": [{"id": "j1", "work_day": "2025-03-03", "revenue": "79228162514264337593543950335"}],
            "shift_roster": {"2025-03-03": ["emp_001"]}
        }"#;
        let (status, body) = send(router, "POST", "/reports/salary", Body::from(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
