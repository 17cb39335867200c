//! Transport Port
//!
//! The only way the application reaches the network. Implementations fetch
//! a URL in the requested representation and hand back a decoded body.
//!
//! XML bodies must be converted into the same `{ "value": [...] }` shape a
//! JSON body has, so projections never see the wire format.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::value_objects::AcceptFormat;

/// Fetch capability injected into the data service
///
/// Any failure (network error, non-success status, undecodable body,
/// timeout) must surface as [`crate::Error::UpstreamRequestFailed`].
#[async_trait]
pub trait DataTransport: Send + Sync {
    /// Perform a GET and decode the body
    async fn fetch(&self, url: &str, format: AcceptFormat) -> Result<Value>;

    /// Name of the transport for logs
    fn transport_name(&self) -> &str;
}
