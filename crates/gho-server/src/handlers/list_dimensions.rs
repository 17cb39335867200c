//! List Dimensions Tool Handler

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use super::respond;
use crate::args::ListDimensionsArgs;
use crate::constants::TOOL_LIST_DIMENSIONS;

/// Handler for the list_dimensions tool
pub struct ListDimensionsHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl ListDimensionsHandler {
    /// Create a new list_dimensions handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the list_dimensions tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<ListDimensionsArgs>,
    ) -> Result<CallToolResult, McpError> {
        respond(TOOL_LIST_DIMENSIONS, self.service.list_dimensions().await)
    }
}
