//! The shape every catalog tool shares.
//!
//! A tool is a validator (untyped [`Arguments`] to a typed params struct)
//! paired with a translator (params to a [`TranslatedRequest`]). The params
//! struct also provides the JSON Schema published to clients.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;

use super::args::Arguments;
use super::error::ToolError;
use super::request::TranslatedRequest;

/// A callable operation backed by one scraping API endpoint.
pub trait ScraperTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Endpoint path on the scraping API (empty for the base URL).
    const ENDPOINT: &'static str;

    /// Validated parameters; its schema is the tool's input schema.
    type Params: JsonSchema + 'static;

    /// Check caller arguments and build typed params.
    fn validate(args: &Arguments) -> Result<Self::Params, ToolError>;

    /// Map validated params onto the outbound request.
    fn translate(params: &Self::Params) -> TranslatedRequest;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

type PrepareFn = fn(&Arguments) -> Result<TranslatedRequest, ToolError>;

/// Type-erased catalog entry: metadata plus the validate/translate pair.
pub struct ToolEntry {
    name: &'static str,
    tool: Tool,
    prepare: PrepareFn,
}

impl ToolEntry {
    pub fn of<T: ScraperTool>() -> Self {
        Self {
            name: T::NAME,
            tool: T::to_tool(),
            prepare: prepare::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Validate `args` and translate them into an outbound request.
    pub fn prepare(&self, args: &Arguments) -> Result<TranslatedRequest, ToolError> {
        (self.prepare)(args)
    }
}

fn prepare<T: ScraperTool>(args: &Arguments) -> Result<TranslatedRequest, ToolError> {
    let params = T::validate(args)?;
    Ok(T::translate(&params))
}
