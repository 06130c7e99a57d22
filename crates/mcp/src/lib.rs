//! MCP (Model Context Protocol) server library.
//!
//! This crate speaks the server side of MCP over newline-delimited JSON-RPC
//! on stdio. Tools are supplied by a [`ToolHandler`].
//!
//! # Example
//!
//! ```no_run
//! use mcp::{CallToolResult, Server, Tool, ToolHandler};
//! use serde_json::Value;
//!
//! struct Hello;
//!
//! impl ToolHandler for Hello {
//!     fn list_tools(&self) -> Vec<Tool> {
//!         vec![Tool {
//!             name: "hello".to_string(),
//!             description: None,
//!             input_schema: serde_json::json!({"type": "object"}),
//!         }]
//!     }
//!
//!     async fn call_tool(
//!         &self,
//!         _name: &str,
//!         _args: Option<Value>,
//!     ) -> mcp::Result<CallToolResult> {
//!         Ok(CallToolResult::text("hello"))
//!     }
//! }
//!
//! # async fn example() -> mcp::Result<()> {
//! Server::new("hello", "0.1.0", Hello).serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod protocol;
mod server;

pub use error::{Error, Result};
pub use protocol::{
    CallToolParams, CallToolResult, ClientInfo, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, RequestId,
    ServerCapabilities, ServerInfo, Tool, ToolContent, ToolsCapability,
};
pub use server::{MAX_MESSAGE_SIZE, Server, ToolHandler};
