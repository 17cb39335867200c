//! Test utilities for gho-server
//!
//! Services are the real implementation over a static transport, so tool
//! results can be checked end to end without network access.

use std::sync::Arc;

use gho_application::{HealthDataServiceImpl, HealthDataServiceInterface};
use gho_providers::transport::StaticTransport;
use gho_server::McpServer;
use rmcp::model::CallToolResult;
use serde_json::Value;

/// Base URL used by every test service
pub const TEST_BASE_URL: &str = "https://ghoapi.test/api";

/// Service answering every request with `body`, plus its transport
pub fn service_with(
    body: Value,
) -> (Arc<dyn HealthDataServiceInterface>, Arc<StaticTransport>) {
    let transport = Arc::new(StaticTransport::with_body(body));
    let service: Arc<dyn HealthDataServiceInterface> =
        Arc::new(HealthDataServiceImpl::new(transport.clone(), TEST_BASE_URL));
    (service, transport)
}

/// Server over [`service_with`]
pub fn server_with(body: Value) -> (McpServer, Arc<StaticTransport>) {
    let (service, transport) = service_with(body);
    (McpServer::new(service), transport)
}

/// Structured JSON body of a tool result
pub fn body_of(result: &CallToolResult) -> Value {
    result
        .structured_content
        .clone()
        .expect("tool results carry structured content")
}

/// Whether the tool result is flagged as an error
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
