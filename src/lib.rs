//! Tool MCP Server Library
//!
//! A minimal Model Context Protocol (MCP) server exposing a couple of string
//! tools, plus a response normalizer that folds inconsistent upstream JSON
//! bodies into one canonical shape.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the name to function table exposed to MCP clients
//!   - **normalizer**: success and error response normalization
//!   - **home**: the chat home page served over HTTP
//!
//! # Example
//!
//! ```rust
//! use tool_mcp_server::domains::normalizer::parse_and_return_clean_json;
//!
//! let result = parse_and_return_clean_json(r#"{"data": {"balance": 10}}"#);
//! assert_eq!(result["balance"], 10);
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
