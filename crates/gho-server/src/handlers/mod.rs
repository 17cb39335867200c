//! MCP Tool Handlers
//!
//! Each handler validates its arguments, calls the health data service and
//! formats the outcome.

pub mod get_country_data;
pub mod get_cross_table;
pub mod get_health_data;
pub mod list_dimension_codes;
pub mod list_dimensions;
pub mod search_indicators;

// Re-export handlers for convenience
pub use get_country_data::GetCountryDataHandler;
pub use get_cross_table::GetCrossTableHandler;
pub use get_health_data::GetHealthDataHandler;
pub use list_dimension_codes::ListDimensionCodesHandler;
pub use list_dimensions::ListDimensionsHandler;
pub use search_indicators::SearchIndicatorsHandler;

use gho_domain::error::Result as DomainResult;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Serialize;
use tracing::warn;
use validator::Validate;

use crate::formatter::ResponseFormatter;

/// Reject arguments failing validation as invalid params
pub(crate) fn validate_args<T: Validate>(args: &T) -> Result<(), McpError> {
    args.validate()
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
}

/// Format a service outcome, logging failures
pub(crate) fn respond<T: Serialize>(
    tool: &str,
    outcome: DomainResult<T>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(result) => ResponseFormatter::format_success(&result),
        Err(e) => {
            warn!(tool, kind = e.kind(), error = %e, "Tool call failed");
            Ok(ResponseFormatter::format_error(&e))
        }
    }
}
