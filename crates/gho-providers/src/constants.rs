//! Provider Constants
//!
//! Constants specific to provider implementations. Protocol constants live
//! in `gho_domain::constants`.

// ============================================================================
// HTTP TRANSPORT CONSTANTS
// ============================================================================

/// Default per-request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default idle connections kept per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// Default idle connection timeout in seconds
pub const HTTP_IDLE_TIMEOUT_SECS: u64 = 90;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Maximum number of characters of an error body kept in error messages
pub const ERROR_BODY_MAX_CHARS: usize = 500;

// ============================================================================
// XML FEED CONSTANTS
// ============================================================================

/// Local name of the element holding one OData Atom record
pub const XML_PROPERTIES_ELEMENT: &[u8] = b"properties";
