//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the string tools exposed to MCP clients
//! - **normalizer**: canonical shaping of upstream JSON responses and errors
//! - **home**: the home page template served over HTTP

pub mod home;
pub mod normalizer;
pub mod tools;
