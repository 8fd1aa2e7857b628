//! Problem Details test helpers
//!
//! Assertions over the stable RFC 7807 error contract, written against a
//! local mirror of the response shape so they do not depend on backend
//! types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local ProblemDetails struct that matches the backend's structure
/// but doesn't depend on backend types
#[derive(Debug, Deserialize, Serialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
/// - HTTP status matches `expected_status`
/// - the body is a complete problem document with the expected `code`
/// - the `x-trace-id` header exists and matches the body's `trace_id`
/// - when given, `detail` contains `expected_detail_contains`
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");

    let body: ProblemDetailsLike =
        serde_json::from_slice(body_bytes).expect("body should be a problem details document");

    assert_eq!(body.status, expected_status.as_u16());
    assert_eq!(body.code, expected_code);
    assert!(
        body.type_.ends_with(expected_code),
        "type URI should end with the code: {}",
        body.type_
    );
    assert!(!body.title.is_empty(), "title should not be empty");

    if let Some(fragment) = expected_detail_contains {
        assert!(
            body.detail.contains(fragment),
            "detail {:?} should contain {:?}",
            body.detail,
            fragment
        );
    }

    let header_trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert!(!header_trace_id.is_empty());
    assert_eq!(
        body.trace_id, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
}
