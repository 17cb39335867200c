//! Null transport for testing and development
//!
//! Answers every request with an empty record list. No network access.

use async_trait::async_trait;
use gho_domain::error::Result;
use gho_domain::ports::DataTransport;
use gho_domain::value_objects::AcceptFormat;
use serde_json::{Value, json};

/// Transport that always returns `{ "value": [] }`
///
/// # Example
///
/// ```rust
/// use gho_domain::ports::DataTransport;
/// use gho_providers::transport::NullTransport;
///
/// let transport = NullTransport::new();
/// assert_eq!(transport.transport_name(), "null");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl NullTransport {
    /// Create a new null transport
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataTransport for NullTransport {
    async fn fetch(&self, _url: &str, _format: AcceptFormat) -> Result<Value> {
        Ok(json!({ "value": [] }))
    }

    fn transport_name(&self) -> &str {
        "null"
    }
}
