//! Composition root tests

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use gho_domain::AcceptFormat;
use gho_infrastructure::{AppConfig, ConfigBuilder, init_app, init_app_with_transport};
use gho_providers::transport::{NullTransport, StaticTransport};
use serde_json::json;

#[test]
fn test_init_app_builds_reqwest_transport() {
    let context = init_app(AppConfig::default()).unwrap();
    assert!(format!("{context:?}").contains("reqwest"));
    assert_eq!(context.config.upstream.accept_format, AcceptFormat::Json);
}

#[tokio::test]
async fn test_service_uses_configured_base_url_and_format() {
    let transport = Arc::new(StaticTransport::with_body(json!({ "value": [] })));
    let config = ConfigBuilder::new()
        .with_base_url("http://localhost:9999/api")
        .with_accept_format(AcceptFormat::Xml)
        .build();

    let context = init_app_with_transport(config, transport.clone());
    let envelope = context
        .health_data_service()
        .list_dimensions()
        .await
        .unwrap();

    assert_eq!(envelope.api_url(), "http://localhost:9999/api/Dimension");
    assert_eq!(transport.requests()[0].format, AcceptFormat::Xml);
}

#[test]
fn test_context_debug_names_transport() {
    let context = init_app_with_transport(AppConfig::default(), Arc::new(NullTransport::new()));
    assert!(format!("{context:?}").contains("null"));
}
