//! Core module containing shared infrastructure components.
//!
//! Configuration, error types, the MCP server handler and the transports
//! that carry MCP messages to it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
