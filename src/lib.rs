//! Scraper MCP Server Library
//!
//! This crate exposes a fixed catalog of web scraping, search, e-commerce,
//! social media and job-board tools over the Model Context Protocol (MCP).
//! Each tool call is validated, translated into a single GET against the
//! scraping API, and the response body is returned as one text block.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool catalog, argument validation, request translation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use scraper_mcp_server::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
