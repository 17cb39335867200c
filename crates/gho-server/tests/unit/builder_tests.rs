//! Tests for the server builder

use gho_server::{BuilderError, McpServerBuilder};
use serde_json::json;

use crate::test_utils::service_with;

#[test]
fn test_builder_requires_health_data_service() {
    let err = McpServerBuilder::new()
        .build()
        .err()
        .expect("missing service should fail");
    assert!(matches!(err, BuilderError::MissingDependency(_)));
    assert!(err.to_string().contains("health data service"));
}

#[test]
fn test_builder_with_service_builds() {
    let (service, _transport) = service_with(json!({ "value": [] }));
    let server = McpServerBuilder::new()
        .with_health_data_service(service)
        .build();
    assert!(server.is_ok());
}
