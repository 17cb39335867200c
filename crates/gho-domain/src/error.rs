//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the GHO data server
///
/// Data operations only ever produce [`Error::MissingParameter`] and
/// [`Error::UpstreamRequestFailed`]. The remaining variants belong to the
/// process shell (configuration loading, logging setup).
#[derive(Error, Debug)]
pub enum Error {
    /// A required request parameter was absent or blank
    #[error("Missing required parameter: {field}")]
    MissingParameter {
        /// Name of the missing parameter
        field: String,
    },

    /// The upstream request or the decoding of its body failed
    #[error("Upstream request failed: {message}")]
    UpstreamRequestFailed {
        /// Description of the failure, including upstream status when known
        message: String,
        /// Original cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Request error creation methods
impl Error {
    /// Create a missing parameter error
    pub fn missing_parameter<S: Into<String>>(field: S) -> Self {
        Self::MissingParameter {
            field: field.into(),
        }
    }

    /// Create an upstream failure without an underlying cause
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamRequestFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create an upstream failure preserving the original cause
    pub fn upstream_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::UpstreamRequestFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "missing_parameter",
            Self::UpstreamRequestFailed { .. } => "upstream_request_failed",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
            Self::Json { .. } => "json",
        }
    }
}
