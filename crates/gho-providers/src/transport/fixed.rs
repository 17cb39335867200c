//! Static transport for testing
//!
//! Replays one canned body (or failure) and records every requested URL so
//! tests can assert what was sent, and whether anything was sent at all.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use gho_domain::error::{Error, Result};
use gho_domain::ports::DataTransport;
use gho_domain::value_objects::AcceptFormat;
use serde_json::Value;

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(Value),
    Failure(String),
}

/// A request seen by [`StaticTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Requested URL
    pub url: String,
    /// Requested representation
    pub format: AcceptFormat,
}

/// Transport replaying a canned response
#[derive(Debug)]
pub struct StaticTransport {
    response: CannedResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StaticTransport {
    /// Answer every request with `body`
    pub fn with_body(body: Value) -> Self {
        Self {
            response: CannedResponse::Body(body),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request as an upstream failure with `message`
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            response: CannedResponse::Failure(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// URL of the most recent request
    pub fn last_url(&self) -> Option<String> {
        self.requests().pop().map(|r| r.url)
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl DataTransport for StaticTransport {
    async fn fetch(&self, url: &str, format: AcceptFormat) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.to_string(),
                format,
            });

        match &self.response {
            CannedResponse::Body(body) => Ok(body.clone()),
            CannedResponse::Failure(message) => Err(Error::upstream(message.clone())),
        }
    }

    fn transport_name(&self) -> &str {
        "static"
    }
}
