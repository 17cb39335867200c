//! Domain layer constants
//!
//! Protocol constants of the upstream OData service. Infrastructure-specific
//! constants remain in `gho_infrastructure::constants`.

// ============================================================================
// PROVENANCE
// ============================================================================

/// Provenance label attached to every result
pub const DATA_SOURCE_LABEL: &str = "WHO Global Health Observatory (GHO) OData API";

/// Default upstream base address
pub const DEFAULT_API_BASE_URL: &str = "https://ghoapi.azureedge.net/api";

// ============================================================================
// ODATA QUERY PARAMETERS
// ============================================================================

/// Filter expression parameter
pub const ODATA_FILTER: &str = "$filter";

/// Result limit parameter
pub const ODATA_TOP: &str = "$top";

/// Ordering parameter
pub const ODATA_ORDER_BY: &str = "$orderby";

// ============================================================================
// ENDPOINTS
// ============================================================================

/// Dimensions listing
pub const ENDPOINT_DIMENSION: &str = "Dimension";

/// Indicator listing
pub const ENDPOINT_INDICATOR: &str = "Indicator";

// ============================================================================
// FILTER FIELDS
// ============================================================================

/// Spatial code field of fact records
pub const FIELD_SPATIAL_DIM: &str = "SpatialDim";

/// Year field of fact records
pub const FIELD_TIME_DIM: &str = "TimeDim";

/// Sex (first auxiliary dimension) field of fact records
pub const FIELD_SEX_DIM: &str = "Dim1";

/// Indicator name field of indicator records
pub const FIELD_INDICATOR_NAME: &str = "IndicatorName";

/// Separator between year range bounds
pub const YEAR_RANGE_SEPARATOR: char = ':';

// ============================================================================
// ORDERING AND LIMITS
// ============================================================================

/// Ordering for per-country retrieval
pub const COUNTRY_DATA_ORDER_BY: &str = "TimeDim desc";

/// Ordering for cross table retrieval
pub const CROSS_TABLE_ORDER_BY: &str = "SpatialDim,TimeDim desc";

/// Default record limit for cross tables
pub const CROSS_TABLE_DEFAULT_LIMIT: u32 = 1000;
