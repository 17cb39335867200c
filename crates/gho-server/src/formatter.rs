//! Response Formatting
//!
//! Turns service results into MCP tool results. Successes carry the JSON
//! envelope; data failures become error results with a JSON body, so the
//! MCP call itself never fails for them.

use gho_domain::error::Error;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Serialize;
use serde_json::{Value, json};

/// Formatter for tool responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Serialize a successful result
    pub fn format_success<T: Serialize>(result: &T) -> Result<CallToolResult, McpError> {
        let value = serde_json::to_value(result).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize result: {e}"), None)
        })?;
        Ok(CallToolResult::structured(value))
    }

    /// Describe a domain error as `{ error, kind, field? }`
    pub fn error_body(error: &Error) -> Value {
        let mut body = json!({
            "error": error.to_string(),
            "kind": error.kind(),
        });
        if let Error::MissingParameter { field } = error {
            body["field"] = json!(field);
        }
        body
    }

    /// Tool error result for a domain error
    pub fn format_error(error: &Error) -> CallToolResult {
        CallToolResult::structured_error(Self::error_body(error))
    }
}
