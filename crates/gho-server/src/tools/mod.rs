//! MCP Tools Module
//!
//! - registry.rs - Tool definitions and schema management
//! - router.rs - Tool dispatch and routing

pub mod registry;
pub mod router;

pub use registry::{ToolDefinitions, create_tool_list};
pub use router::{ToolHandlers, dispatch_tool, route_tool_call};
