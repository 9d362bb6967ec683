//! Tool Registry - dispatch for all tools.
//!
//! Resolves a tool name against the [`Catalog`], validates and translates
//! the arguments, runs the outbound call, and wraps the body in the
//! response envelope. Validation and lookup failures return before any
//! outbound call is made.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::core::config::UpstreamConfig;

use super::args::Arguments;
use super::catalog::Catalog;
use super::error::{ToolError, UpstreamError};
use super::upstream::{HttpUpstream, Upstream};

/// Tool registry - lists and dispatches every catalog tool.
///
/// Holds no per-call state; concurrent calls share only the read-only
/// catalog and the upstream client.
#[derive(Clone)]
pub struct ToolRegistry {
    upstream: Arc<dyn Upstream>,
    timeout: Duration,
}

impl ToolRegistry {
    /// Create a registry talking to the configured scraping API.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ToolError> {
        let upstream = HttpUpstream::from_config(config)?;
        Ok(Self::with_upstream(Arc::new(upstream), config.timeout()))
    }

    /// Create a registry over any [`Upstream`] implementation.
    pub fn with_upstream(upstream: Arc<dyn Upstream>, timeout: Duration) -> Self {
        Self { upstream, timeout }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        Catalog::global().names()
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    pub fn list_tools(&self) -> Vec<Tool> {
        Catalog::global().tools()
    }

    /// Run one tool call to completion.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let entry = Catalog::global().get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::method_not_found(name)
        })?;

        let args = Arguments::from_json(arguments);
        let request = entry.prepare(&args).inspect_err(|e| {
            warn!("Rejected arguments for {}: {}", name, e);
        })?;

        info!("Calling {} ({})", name, request.endpoint_path());
        debug!("Outbound query: {}", request.redacted_query());

        let call = AssertUnwindSafe(self.upstream.execute(&request)).catch_unwind();
        let body = match tokio::time::timeout(self.timeout, call).await {
            Err(_) => return Err(UpstreamError::Timeout(self.timeout).into()),
            Ok(Err(panic)) => return Err(ToolError::internal(panic_message(&*panic))),
            Ok(Ok(result)) => result?,
        };

        response_envelope(body)
    }
}

/// Wrap an upstream body in a single text block.
///
/// JSON bodies are pretty-printed unless that would alter a number literal
/// (integers beyond 64 bits, exponent forms); those and anything
/// else (HTML, plain text) are passed through verbatim.
pub fn response_envelope(body: String) -> Result<CallToolResult, ToolError> {
    let text = match serde_json::from_str::<Value>(&body) {
        Ok(json) if renders_losslessly(&json, &body) => serde_json::to_string_pretty(&json)?,
        _ => body,
    };
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn renders_losslessly(json: &Value, body: &str) -> bool {
    serde_json::to_string(json)
        .is_ok_and(|compact| number_literals(&compact) == number_literals(body))
}

/// Number literals outside string values, in document order.
fn number_literals(json: &str) -> Vec<&str> {
    let mut literals = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut start = None;

    for (i, c) in json.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let numeric = c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E');
        match (start, numeric) {
            (None, true) if c == '-' || c.is_ascii_digit() => start = Some(i),
            (Some(s), false) => {
                literals.push(&json[s..i]);
                start = None;
            }
            _ => {}
        }
        if c == '"' {
            in_string = true;
        }
    }

    if let Some(s) = start {
        literals.push(&json[s..]);
    }
    literals
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("Upstream call panicked: {detail}")
}
