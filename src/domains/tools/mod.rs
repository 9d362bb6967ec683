//! Tools domain module.
//!
//! This module handles the tool registry and dispatch layer: a fixed
//! catalog of scraping, search, e-commerce, social and job-board tools,
//! each validated and translated into one GET against the scraping API.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by source family
//! - `validators.rs` - Reusable predicates (non-empty, URL, enum)
//! - `args.rs` - Scalar argument bag and typed readers
//! - `request.rs` - Translated outbound request
//! - `upstream.rs` - HTTP Transport Adapter (reqwest)
//! - `catalog.rs` - Ordered, read-only tool catalog
//! - `registry.rs` - Dispatch and response envelope
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define a params struct and a type implementing [`ScraperTool`] in the
//!    matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add `ToolEntry::of::<MyTool>()` to the catalog in `catalog.rs`
//!
//! **No need to modify `server.rs` or the transports.**

mod args;
mod catalog;
pub mod definitions;
mod error;
mod registry;
mod request;
mod tool;
mod upstream;
pub mod validators;

pub use args::{ArgValue, Arguments};
pub use catalog::Catalog;
pub use error::{ErrorKind, ToolError, UpstreamError};
pub use registry::{ToolRegistry, response_envelope};
pub use request::TranslatedRequest;
pub use tool::{ScraperTool, ToolEntry};
pub use upstream::{HttpUpstream, Upstream};
