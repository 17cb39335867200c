//! Reqwest Transport
//!
//! Implements the DataTransport port with a shared reqwest client. The
//! client is received via constructor injection; one instance serves all
//! concurrent calls.

use std::time::Duration;

use async_trait::async_trait;
use gho_domain::error::{Error, Result};
use gho_domain::ports::DataTransport;
use gho_domain::value_objects::AcceptFormat;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::trace;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;
use crate::http::HttpClientConfig;
use crate::utils::HttpResponseUtils;

/// HTTP transport backed by reqwest
///
/// ## Example
///
/// ```rust,no_run
/// use gho_providers::http::HttpClientConfig;
/// use gho_providers::transport::ReqwestTransport;
/// use std::time::Duration;
///
/// fn example() -> gho_domain::Result<()> {
///     let config = HttpClientConfig::with_timeout(Duration::from_secs(10));
///     let transport = ReqwestTransport::from_config(&config)?;
///     Ok(())
/// }
/// ```
pub struct ReqwestTransport {
    http_client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport from an existing client
    ///
    /// # Arguments
    /// * `http_client` - Reqwest HTTP client for making requests
    /// * `timeout` - Per-request timeout
    pub fn new(http_client: Client, timeout: Duration) -> Self {
        Self {
            http_client,
            timeout,
        }
    }

    /// Build the client from configuration
    pub fn from_config(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self::new(config.build_client()?, config.timeout))
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DataTransport for ReqwestTransport {
    async fn fetch(&self, url: &str, format: AcceptFormat) -> Result<Value> {
        trace!(url, accept = format.mime_type(), "Sending GET");

        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, format.mime_type())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::upstream_with_source(
                        format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}: {url}", self.timeout()),
                        e,
                    )
                } else {
                    Error::upstream_with_source(format!("HTTP request to {url} failed: {e}"), e)
                }
            })?;

        HttpResponseUtils::check_and_decode(response, format).await
    }

    fn transport_name(&self) -> &str {
        "reqwest"
    }
}
