//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registry entry becomes one dynamic route for the STDIO/TCP
//! transports, so the router never needs to know the concrete tools.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};
use tracing::info;

use super::definitions::MessageParams;
use super::registry::{ToolEntry, ToolRegistry};

/// Build the tool router with every tool in `registry`.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .entries()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(create_route(*entry))
        })
}

/// Create a ToolRoute for a single registry entry.
fn create_route<S>(entry: ToolEntry) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(entry.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params: MessageParams = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            info!("Tool called: {}", entry.name);
            let output = entry.call(&params.message);

            Ok(CallToolResult::success(vec![Content::text(output)]))
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&ToolRegistry::new());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"exampleTool"));
        assert!(names.contains(&"findChildrenOfParent"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_empty_registry_builds_empty_router() {
        let registry = ToolRegistry::from_entries(Vec::<ToolEntry>::new());
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        assert!(router.list_all().is_empty());
    }
}
