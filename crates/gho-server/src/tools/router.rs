//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::{
    TOOL_GET_COUNTRY_DATA, TOOL_GET_CROSS_TABLE, TOOL_GET_HEALTH_DATA, TOOL_LIST_DIMENSION_CODES,
    TOOL_LIST_DIMENSIONS, TOOL_SEARCH_INDICATORS,
};
use crate::handlers::{
    GetCountryDataHandler, GetCrossTableHandler, GetHealthDataHandler, ListDimensionCodesHandler,
    ListDimensionsHandler, SearchIndicatorsHandler,
};

/// Handler references for tool routing
#[derive(Clone)]
pub struct ToolHandlers {
    /// Handler for listing dimensions
    pub list_dimensions: Arc<ListDimensionsHandler>,
    /// Handler for listing dimension values
    pub list_dimension_codes: Arc<ListDimensionCodesHandler>,
    /// Handler for indicator search
    pub search_indicators: Arc<SearchIndicatorsHandler>,
    /// Handler for raw observation queries
    pub get_health_data: Arc<GetHealthDataHandler>,
    /// Handler for per-country observations
    pub get_country_data: Arc<GetCountryDataHandler>,
    /// Handler for cross tables
    pub get_cross_table: Arc<GetCrossTableHandler>,
}

/// Route a tool call request to the appropriate handler
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    dispatch_tool(request.name.as_ref(), request.arguments, handlers).await
}

/// Dispatch a tool by name with its raw argument object
pub async fn dispatch_tool(
    name: &str,
    arguments: Option<Map<String, Value>>,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    debug!(tool = name, "Dispatching tool call");
    match name {
        TOOL_LIST_DIMENSIONS => {
            let args = parse_args(arguments)?;
            handlers.list_dimensions.handle(Parameters(args)).await
        }
        TOOL_LIST_DIMENSION_CODES => {
            let args = parse_args(arguments)?;
            handlers.list_dimension_codes.handle(Parameters(args)).await
        }
        TOOL_SEARCH_INDICATORS => {
            let args = parse_args(arguments)?;
            handlers.search_indicators.handle(Parameters(args)).await
        }
        TOOL_GET_HEALTH_DATA => {
            let args = parse_args(arguments)?;
            handlers.get_health_data.handle(Parameters(args)).await
        }
        TOOL_GET_COUNTRY_DATA => {
            let args = parse_args(arguments)?;
            handlers.get_country_data.handle(Parameters(args)).await
        }
        TOOL_GET_CROSS_TABLE => {
            let args = parse_args(arguments)?;
            handlers.get_cross_table.handle(Parameters(args)).await
        }
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {name}"),
            None,
        )),
    }
}

/// Parse request arguments into the expected type
fn parse_args<T: serde::de::DeserializeOwned>(
    arguments: Option<Map<String, Value>>,
) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
}
