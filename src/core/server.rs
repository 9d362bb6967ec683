//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, grouped by source
//! family, and collected into the catalog in `domains/tools/catalog.rs`.
//! Both `ServerHandler` (stdio) and the HTTP transport dispatch through the
//! same [`ToolRegistry`].
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone; clones share the configuration and the registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls to the scraping API.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::new(&config.upstream)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the serialized result (for HTTP transport).
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let result = self.registry.call_tool(name, arguments).await?;
        Ok(serde_json::to_value(result)?)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Web scraping, search, e-commerce, social media and job-board tools. \
                 Every tool requires an `api_key` for the scraping API and returns the \
                 API's response as text."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.registry
            .call_tool(&request.name, request.arguments)
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{TranslatedRequest, Upstream, UpstreamError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    struct EchoUpstream;

    #[async_trait]
    impl Upstream for EchoUpstream {
        async fn execute(
            &self,
            request: &TranslatedRequest,
        ) -> std::result::Result<String, UpstreamError> {
            Ok(json!({ "path": request.endpoint_path() }).to_string())
        }
    }

    fn server() -> McpServer {
        let registry = ToolRegistry::with_upstream(Arc::new(EchoUpstream), Duration::from_secs(5));
        McpServer::with_registry(Config::default(), registry)
    }

    #[test]
    fn test_server_info() {
        let server = server();
        assert_eq!(server.name(), "scraper-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));

        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_new_from_default_config() {
        assert!(McpServer::new(Config::default()).is_ok());
    }

    #[test]
    fn test_list_tools_json() {
        let tools = server().list_tools_json();
        assert_eq!(tools.len(), 17);
        assert_eq!(tools[0]["name"], "scrape_webpage");
        assert!(tools[0]["inputSchema"]["properties"]["url"].is_object());
    }

    #[tokio::test]
    async fn test_call_tool_json() {
        let args = json!({ "query": "ai", "api_key": "k" });
        let value = server()
            .call_tool_json("google_search", args.as_object().cloned())
            .await
            .unwrap();

        assert_eq!(value["isError"], false);
        let text = value["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("/google"));
    }

    #[tokio::test]
    async fn test_call_tool_json_unknown() {
        let err = server().call_tool_json("nope", None).await.unwrap_err();
        assert_eq!(McpError::from(err).code, ErrorCode::METHOD_NOT_FOUND);
    }
}
