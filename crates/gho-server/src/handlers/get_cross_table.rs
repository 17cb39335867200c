//! Get Cross Table Tool Handler
//!
//! Builds a multi-country, multi-year table with distinct-value counts.

use std::sync::Arc;
use std::time::Instant;

use gho_application::HealthDataServiceInterface;
use gho_domain::value_objects::CrossTableQuery;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use tracing::debug;

use super::{respond, validate_args};
use crate::args::CrossTableArgs;
use crate::constants::TOOL_GET_CROSS_TABLE;

/// Handler for the get_cross_table tool
pub struct GetCrossTableHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl GetCrossTableHandler {
    /// Create a new get_cross_table handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the get_cross_table tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<CrossTableArgs>,
    ) -> Result<CallToolResult, McpError> {
        validate_args(&args)?;

        let timer = Instant::now();
        let query = CrossTableQuery::from(args);
        let outcome = self.service.get_cross_table(&query).await;
        debug!(elapsed = ?timer.elapsed(), "Cross table request finished");

        respond(TOOL_GET_CROSS_TABLE, outcome)
    }
}
