//! List Dimension Codes Tool Handler

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use super::{respond, validate_args};
use crate::args::ListDimensionCodesArgs;
use crate::constants::TOOL_LIST_DIMENSION_CODES;

/// Handler for the list_dimension_codes tool
pub struct ListDimensionCodesHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl ListDimensionCodesHandler {
    /// Create a new list_dimension_codes handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the list_dimension_codes tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<ListDimensionCodesArgs>,
    ) -> Result<CallToolResult, McpError> {
        validate_args(&args)?;

        let outcome = self
            .service
            .list_dimension_codes(args.dimension_code.as_deref())
            .await;
        respond(TOOL_LIST_DIMENSION_CODES, outcome)
    }
}
