//! MCP Server Implementation
//!
//! Core MCP protocol server exposing the health data service as tools.

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use crate::constants::{SERVER_INSTRUCTIONS, SERVER_NAME};
use crate::handlers::{
    GetCountryDataHandler, GetCrossTableHandler, GetHealthDataHandler, ListDimensionCodesHandler,
    ListDimensionsHandler, SearchIndicatorsHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Receives the health data service through constructor injection; every
/// handler shares it.
#[derive(Clone)]
pub struct McpServer {
    /// Handlers, one per tool
    handlers: ToolHandlers,
}

impl McpServer {
    /// Create a new MCP server with injected dependencies
    pub fn new(health_data_service: Arc<dyn HealthDataServiceInterface>) -> Self {
        let handlers = ToolHandlers {
            list_dimensions: Arc::new(ListDimensionsHandler::new(Arc::clone(
                &health_data_service,
            ))),
            list_dimension_codes: Arc::new(ListDimensionCodesHandler::new(Arc::clone(
                &health_data_service,
            ))),
            search_indicators: Arc::new(SearchIndicatorsHandler::new(Arc::clone(
                &health_data_service,
            ))),
            get_health_data: Arc::new(GetHealthDataHandler::new(Arc::clone(
                &health_data_service,
            ))),
            get_country_data: Arc::new(GetCountryDataHandler::new(Arc::clone(
                &health_data_service,
            ))),
            get_cross_table: Arc::new(GetCrossTableHandler::new(health_data_service)),
        };

        Self { handlers }
    }

    /// Tool handlers, for dispatching outside the MCP session
    pub fn handlers(&self) -> &ToolHandlers {
        &self.handlers
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        route_tool_call(request, self.handlers()).await
    }
}
