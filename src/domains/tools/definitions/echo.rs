//! Echo tool definition.
//!
//! Diagnostic tool that hands the input straight back, handy for checking
//! that a client can reach the server at all.

use tracing::{debug, instrument};

use crate::domains::tools::registry::ToolEntry;

/// Echo tool - returns the message prefixed with `Echo: `.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "exampleTool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Example tool that echoes the input message";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(message: &str) -> String {
        debug!("Echoing {} byte(s)", message.len());
        format!("Echo: {}", message)
    }

    /// Registry entry for this tool.
    pub const fn entry() -> ToolEntry {
        ToolEntry::new(Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo() {
        assert_eq!(EchoTool::execute("hi"), "Echo: hi");
    }

    #[test]
    fn test_echo_empty_and_unicode() {
        assert_eq!(EchoTool::execute(""), "Echo: ");
        assert_eq!(EchoTool::execute("héllo wörld"), "Echo: héllo wörld");
    }

    #[test]
    fn test_entry_dispatches_to_execute() {
        let entry = EchoTool::entry();
        assert_eq!(entry.name, "exampleTool");
        assert_eq!(entry.call("ping"), "Echo: ping");
    }
}
