//! Tests for response formatting

use gho_domain::{Dimension, Error, ResultEnvelope};
use gho_server::formatter::ResponseFormatter;

use crate::test_utils::{body_of, is_error};

#[test]
fn test_success_carries_envelope_json() {
    let envelope = ResultEnvelope::new(
        "dimensions",
        vec![Dimension {
            code: "SEX".to_string(),
            title: "Sex".to_string(),
            description: String::new(),
        }],
        "GHO",
        "https://x/api/Dimension",
    );

    let result = ResponseFormatter::format_success(&envelope).unwrap();

    assert!(!is_error(&result));
    let body = body_of(&result);
    assert_eq!(body["dimensions"][0]["code"], "SEX");
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["api_url"], "https://x/api/Dimension");
    assert!(!result.content.is_empty());
}

#[test]
fn test_missing_parameter_names_field() {
    let result = ResponseFormatter::format_error(&Error::missing_parameter("indicator_code"));

    assert!(is_error(&result));
    let body = body_of(&result);
    assert_eq!(body["kind"], "missing_parameter");
    assert_eq!(body["field"], "indicator_code");
    assert_eq!(body["error"], "Missing required parameter: indicator_code");
}

#[test]
fn test_upstream_failure_has_no_field() {
    let body = ResponseFormatter::error_body(&Error::upstream("server error (503)"));

    assert_eq!(body["kind"], "upstream_request_failed");
    assert!(body.get("field").is_none());
    assert!(body["error"].as_str().unwrap().contains("503"));
}
