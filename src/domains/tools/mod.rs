//! Tools domain module.
//!
//! Tools are the callables an MCP client can discover and invoke. Every
//! tool here takes one `message` string and returns one string.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Name to function table and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry (STDIO/TCP)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `NAME`, `DESCRIPTION`,
//!    `execute()` and `entry()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its `entry()` to `ToolRegistry::new()`
//!
//! The router picks it up from the registry.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{ToolEntry, ToolFn, ToolRegistry};
pub use router::build_tool_router;
