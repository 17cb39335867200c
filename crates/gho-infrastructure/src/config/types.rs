//! Configuration data types

use std::path::PathBuf;

use gho_domain::constants::DEFAULT_API_BASE_URL;
use gho_domain::value_objects::AcceptFormat;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_UPSTREAM_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Upstream OData service
    pub upstream: UpstreamConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Upstream OData service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base address every request path is appended to
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Representation requested from the upstream
    pub accept_format: AcceptFormat,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            accept_format: AcceptFormat::default(),
            user_agent: format!("gho-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
