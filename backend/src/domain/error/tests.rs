//! Tests for domain error construction and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::constraint_violation("dup"), ErrorCode::ConstraintViolation)]
#[case(Error::upstream_unavailable("down"), ErrorCode::UpstreamUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("No users found")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "No users found" })
    );
}

#[rstest]
fn serialises_trace_id_and_details_when_present() {
    let error = Error::invalid_request("bad")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "num_users" }));
    let value = serde_json::to_value(error).expect("serialise");
    assert_eq!(value["traceId"], json!(TRACE_ID));
    assert_eq!(value["details"]["field"], json!("num_users"));
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::upstream_unavailable("down").to_string(), "down");
}
