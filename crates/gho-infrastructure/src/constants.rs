//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol constants are defined in `gho_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "gho.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "gho";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GHO";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// UPSTREAM CONSTANTS
// ============================================================================

/// Default upstream request timeout in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GHO_LOG";

/// File name prefix of rolled log files when the path has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "gho";
