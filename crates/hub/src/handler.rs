//! MCP glue: serve a [`Catalog`] through [`mcp::Server`].

use serde_json::Value;

use crate::invoke::Transport;
use crate::outcome::Outcome;
use crate::registry::{Catalog, Tool};

impl From<Outcome> for mcp::CallToolResult {
    fn from(outcome: Outcome) -> Self {
        if outcome.is_error() {
            mcp::CallToolResult::error(outcome.text())
        } else {
            mcp::CallToolResult::text(outcome.text())
        }
    }
}

impl<T: Transport> From<&Tool<T>> for mcp::Tool {
    fn from(tool: &Tool<T>) -> Self {
        let descriptor = tool.descriptor();
        mcp::Tool {
            name: descriptor.name.to_string(),
            description: Some(descriptor.description.to_string()),
            input_schema: descriptor.input_schema(),
        }
    }
}

impl<T: Transport> mcp::ToolHandler for Catalog<T> {
    fn list_tools(&self) -> Vec<mcp::Tool> {
        self.tools().iter().map(mcp::Tool::from).collect()
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> mcp::Result<mcp::CallToolResult> {
        match self.invoke(name, arguments).await {
            Ok(outcome) => Ok(outcome.into()),
            Err(crate::Error::ToolNotFound(name)) => Err(mcp::Error::ToolNotFound(name)),
            Err(e) => Ok(mcp::CallToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindError;
    use crate::config::ApiConfig;
    use crate::decode::Decoded;
    use mcp::ToolHandler;

    #[test]
    fn success_is_not_flagged() {
        let result = mcp::CallToolResult::from(Outcome::Success(Decoded::Raw("ok".into())));
        assert!(!result.is_error);
        assert_eq!(result.content[0].as_text(), Some("ok"));
    }

    #[test]
    fn failures_are_flagged() {
        let result = mcp::CallToolResult::from(Outcome::ArgumentError(
            BindError::MissingRequired("namespace".into()),
        ));
        assert!(result.is_error);
        assert_eq!(
            result.content[0].as_text(),
            Some("missing required parameter: namespace")
        );
    }

    #[test]
    fn lists_every_tool_with_schema() {
        let catalog = Catalog::new(ApiConfig::new("https://hub.docker.com").unwrap());
        let tools = catalog.list_tools();
        assert_eq!(tools.len(), 19);
        let tags = tools
            .iter()
            .find(|t| t.name == "get_v2_namespaces_namespace_repositories_repository_tags")
            .unwrap();
        assert_eq!(tags.input_schema["type"], "object");
        assert_eq!(
            tags.input_schema["required"],
            serde_json::json!(["namespace", "repository"])
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_a_protocol_error() {
        let catalog = Catalog::new(ApiConfig::new("https://hub.docker.com").unwrap());
        let err = catalog.call_tool("nope", None).await.unwrap_err();
        assert!(matches!(err, mcp::Error::ToolNotFound(name) if name == "nope"));
    }
}
