//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is a plain table from tool name to function pointer, built
//! once at startup. Both transports read from it:
//! - STDIO/TCP through the rmcp router built in `router.rs`
//! - HTTP through [`ToolRegistry::call_tool`]

use std::collections::BTreeMap;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool},
};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::{EchoTool, FamilyLookupTool, MessageParams};

/// Signature shared by every tool: one string in, one string out.
pub type ToolFn = fn(&str) -> String;

/// A registered tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolEntry {
    /// Name the host calls the tool by.
    pub name: &'static str,

    /// Description shown to clients.
    pub description: &'static str,

    handler: ToolFn,
}

impl ToolEntry {
    pub const fn new(name: &'static str, description: &'static str, handler: ToolFn) -> Self {
        Self {
            name,
            description,
            handler,
        }
    }

    /// Run the tool.
    pub fn call(&self, message: &str) -> String {
        (self.handler)(message)
    }

    /// Create a Tool model for this entry (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: cached_schema_for_type::<MessageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the single source of truth for available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    entries: BTreeMap<&'static str, ToolEntry>,
}

impl ToolRegistry {
    /// Create the registry with all built-in tools.
    pub fn new() -> Self {
        Self::from_entries([EchoTool::entry(), FamilyLookupTool::entry()])
    }

    /// Create a registry from an explicit list of entries.
    ///
    /// A later entry replaces an earlier one with the same name.
    pub fn from_entries(entries: impl IntoIterator<Item = ToolEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.name, entry))
            .collect();
        Self { entries }
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Iterate over registered entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.values()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.entries().map(ToolEntry::to_tool).collect()
    }

    /// Invoke a tool by name with its single string argument.
    pub fn invoke(&self, name: &str, message: &str) -> Result<String, ToolError> {
        let entry = self.entries.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        info!("Invoking tool: {}", name);
        Ok(entry.call(message))
    }

    /// Dispatch an HTTP tool call.
    ///
    /// `arguments` is the JSON-RPC `arguments` object; its `message` field is
    /// passed to the tool. The response mirrors rmcp's `CallToolResult`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let message = arguments
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'message' parameter"))?;

        let output = self.invoke(name, message)?;
        let result = CallToolResult::success(vec![Content::text(output)]);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.tool_names(),
            vec!["exampleTool", "findChildrenOfParent"]
        );
    }

    #[test]
    fn test_tool_metadata_has_message_schema() {
        let tools = ToolRegistry::new().get_all_tools();
        assert_eq!(tools.len(), 2);
        for tool in tools {
            assert!(tool.description.is_some());
            let properties = tool.input_schema.get("properties").unwrap();
            assert!(properties.get("message").is_some());
        }
    }

    #[test]
    fn test_invoke_by_name() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.invoke("exampleTool", "hi").unwrap(), "Echo: hi");
        assert!(
            registry
                .invoke("findChildrenOfParent", "hello rujimin")
                .unwrap()
                .contains("stella hermine lufgard")
        );
    }

    #[test]
    fn test_invoke_unknown() {
        let registry = ToolRegistry::new();
        let err = registry.invoke("unknown", "hi").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "unknown"));
    }

    #[test]
    fn test_from_entries_replaces_duplicates() {
        fn shout(message: &str) -> String {
            message.to_uppercase()
        }

        let registry = ToolRegistry::from_entries([
            EchoTool::entry(),
            ToolEntry::new(EchoTool::NAME, "louder echo", shout),
        ]);
        assert_eq!(registry.tool_names(), vec!["exampleTool"]);
        assert_eq!(registry.invoke("exampleTool", "hi").unwrap(), "HI");
    }

    #[test]
    fn test_registry_call_echo() {
        let registry = ToolRegistry::new();
        let result = registry
            .call_tool("exampleTool", json!({ "message": "hi" }))
            .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "Echo: hi");
    }

    #[test]
    fn test_registry_call_missing_message() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("exampleTool", json!({}));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("unknown", json!({ "message": "hi" }));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
