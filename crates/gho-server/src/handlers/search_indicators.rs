//! Search Indicators Tool Handler

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use super::{respond, validate_args};
use crate::args::SearchIndicatorsArgs;
use crate::constants::TOOL_SEARCH_INDICATORS;

/// Handler for the search_indicators tool
pub struct SearchIndicatorsHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl SearchIndicatorsHandler {
    /// Create a new search_indicators handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the search_indicators tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<SearchIndicatorsArgs>,
    ) -> Result<CallToolResult, McpError> {
        validate_args(&args)?;

        let outcome = self
            .service
            .search_indicators(args.keywords.as_deref())
            .await;
        respond(TOOL_SEARCH_INDICATORS, outcome)
    }
}
