//! HTTP Response Utilities
//!
//! Status checking and body decoding shared by HTTP transports.

use gho_domain::error::{Error, Result};
use gho_domain::value_objects::AcceptFormat;
use reqwest::Response;
use serde_json::Value;

use crate::constants::ERROR_BODY_MAX_CHARS;
use crate::xml::parse_feed;

/// Keep the head of an upstream error body
fn truncate_body(body: &str) -> String {
    let mut head: String = body.chars().take(ERROR_BODY_MAX_CHARS).collect();
    if head.len() < body.len() {
        head.push('…');
    }
    head
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and decode the body in the negotiated format
    ///
    /// Non-success statuses become upstream failures carrying the status
    /// code and the head of the response body.
    pub async fn check_and_decode(response: Response, format: AcceptFormat) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(Error::upstream(match code {
                404 => format!("{url} not found (404): {}", truncate_body(&error_text)),
                500..=599 => format!(
                    "{url} server error ({code}): {}",
                    truncate_body(&error_text)
                ),
                _ => format!(
                    "{url} request failed ({code}): {}",
                    truncate_body(&error_text)
                ),
            }));
        }

        match format {
            AcceptFormat::Json => response.json::<Value>().await.map_err(|e| {
                Error::upstream_with_source(format!("{url} returned an undecodable JSON body"), e)
            }),
            AcceptFormat::Xml => {
                let body = response.text().await.map_err(|e| {
                    Error::upstream_with_source(format!("{url} body could not be read"), e)
                })?;
                parse_feed(&body)
            }
        }
    }
}
