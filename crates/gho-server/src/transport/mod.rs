//! MCP transports
//!
//! Only stdio is supported: the server is launched by an MCP client as a
//! child process.

pub mod stdio;

pub use stdio::StdioServerExt;
