//! Server constants

// ============================================================================
// TOOL NAMES
// ============================================================================

/// List every dimension
pub const TOOL_LIST_DIMENSIONS: &str = "list_dimensions";

/// List the values of one dimension
pub const TOOL_LIST_DIMENSION_CODES: &str = "list_dimension_codes";

/// Search indicators by name
pub const TOOL_SEARCH_INDICATORS: &str = "search_indicators";

/// Raw indicator observations
pub const TOOL_GET_HEALTH_DATA: &str = "get_health_data";

/// Observations for one country
pub const TOOL_GET_COUNTRY_DATA: &str = "get_country_data";

/// Multi-country, multi-year table with summary
pub const TOOL_GET_CROSS_TABLE: &str = "get_cross_table";

// ============================================================================
// SERVER METADATA
// ============================================================================

/// Name announced to MCP clients
pub const SERVER_NAME: &str = "GHO Data Server";

/// Instructions announced to MCP clients
pub const SERVER_INSTRUCTIONS: &str = "WHO Global Health Observatory data server\n\n\
     Query indicators and observations from the GHO OData API.\n\n\
     Tools:\n\
     - list_dimensions: List every dimension (COUNTRY, SEX, YEAR, ...)\n\
     - list_dimension_codes: List the values of one dimension\n\
     - search_indicators: Find indicators by name keywords\n\
     - get_health_data: Fetch observations of an indicator with raw OData options\n\
     - get_country_data: Fetch observations of an indicator for one country\n\
     - get_cross_table: Fetch a multi-country, multi-year table with summary counts\n";
