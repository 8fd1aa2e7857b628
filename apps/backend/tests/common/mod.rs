#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate that a response follows the ProblemDetails structure with
/// the expected status and stable code, and that the body's trace_id
/// matches the x-trace-id header.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    backend_test_support::problem_details::assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        StatusCode::from_u16(expected_status).expect("valid status code"),
        expected_code,
        expected_detail_contains,
    );
}

/// Read a JSON body from a response that is expected to succeed.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.status().is_success(),
        "expected success, got {}",
        resp.status()
    );
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("body should be valid JSON")
}
