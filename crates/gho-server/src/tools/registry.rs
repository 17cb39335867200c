//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;

use crate::args::{
    CountryDataArgs, CrossTableArgs, HealthDataArgs, ListDimensionCodesArgs, ListDimensionsArgs,
    SearchIndicatorsArgs,
};
use crate::constants::{
    TOOL_GET_COUNTRY_DATA, TOOL_GET_CROSS_TABLE, TOOL_GET_HEALTH_DATA, TOOL_LIST_DIMENSION_CODES,
    TOOL_LIST_DIMENSIONS, TOOL_SEARCH_INDICATORS,
};

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the list_dimensions tool definition
    pub fn list_dimensions() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_LIST_DIMENSIONS,
            "List every dimension of the WHO GHO data model (COUNTRY, SEX, YEAR, ...)",
            schemars::schema_for!(ListDimensionsArgs),
        )
    }

    /// Get the list_dimension_codes tool definition
    pub fn list_dimension_codes() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_LIST_DIMENSION_CODES,
            "List the admissible values of one dimension",
            schemars::schema_for!(ListDimensionCodesArgs),
        )
    }

    /// Get the search_indicators tool definition
    pub fn search_indicators() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_SEARCH_INDICATORS,
            "Search health indicators whose name contains the given keywords",
            schemars::schema_for!(SearchIndicatorsArgs),
        )
    }

    /// Get the get_health_data tool definition
    pub fn get_health_data() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_HEALTH_DATA,
            "Fetch observations of an indicator with optional raw OData filter, limit and ordering",
            schemars::schema_for!(HealthDataArgs),
        )
    }

    /// Get the get_country_data tool definition
    pub fn get_country_data() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_COUNTRY_DATA,
            "Fetch observations of an indicator for one country, newest first",
            schemars::schema_for!(CountryDataArgs),
        )
    }

    /// Get the get_cross_table tool definition
    pub fn get_cross_table() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_CROSS_TABLE,
            "Fetch an indicator across several countries and years with summary counts",
            schemars::schema_for!(CrossTableArgs),
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {name} is not an object"), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Ok(vec![
        ToolDefinitions::list_dimensions()?,
        ToolDefinitions::list_dimension_codes()?,
        ToolDefinitions::search_indicators()?,
        ToolDefinitions::get_health_data()?,
        ToolDefinitions::get_country_data()?,
        ToolDefinitions::get_cross_table()?,
    ])
}
