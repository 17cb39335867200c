//! Get Health Data Tool Handler

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use gho_domain::value_objects::HealthDataQuery;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use super::{respond, validate_args};
use crate::args::HealthDataArgs;
use crate::constants::TOOL_GET_HEALTH_DATA;

/// Handler for the get_health_data tool
pub struct GetHealthDataHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl GetHealthDataHandler {
    /// Create a new get_health_data handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the get_health_data tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<HealthDataArgs>,
    ) -> Result<CallToolResult, McpError> {
        validate_args(&args)?;

        let query = HealthDataQuery::from(args);
        respond(TOOL_GET_HEALTH_DATA, self.service.get_health_data(&query).await)
    }
}
