//! Unit tests for domain error types

use gho_domain::Error;
use std::error::Error as _;

#[test]
fn test_missing_parameter_names_the_field() {
    let err = Error::missing_parameter("indicator_code");
    assert_eq!(
        err.to_string(),
        "Missing required parameter: indicator_code"
    );
    assert_eq!(err.kind(), "missing_parameter");
}

#[test]
fn test_upstream_error_preserves_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
    let err = Error::upstream_with_source("GET https://example.org failed", io);

    assert_eq!(err.kind(), "upstream_request_failed");
    assert!(err.to_string().contains("GET https://example.org failed"));
    let source = err.source().expect("source should be preserved");
    assert!(source.to_string().contains("deadline elapsed"));
}

#[test]
fn test_upstream_error_without_source() {
    let err = Error::upstream("status 503");
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "Upstream request failed: status 503");
}

#[test]
fn test_configuration_error_kind() {
    let err = Error::configuration("timeout cannot be 0");
    assert_eq!(err.kind(), "configuration");
    assert!(err.to_string().starts_with("Configuration error"));
}
