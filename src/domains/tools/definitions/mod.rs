//! Tool definitions module.
//!
//! Tools are grouped by the kind of source they target. Each tool pairs a
//! params struct (validation + schema) with its endpoint translation.

pub mod ecommerce;
pub mod jobs;
pub mod search;
pub mod social;
pub mod web;

pub use ecommerce::{AmazonProductSearchTool, AmazonReviewsTool, WalmartProductSearchTool};
pub use jobs::{IndeedJobsTool, LinkedinJobsTool};
pub use search::{
    BingSearchTool, GoogleAiSearchTool, GoogleMapsSearchTool, GoogleNewsSearchTool,
    GoogleSearchTool, TimeRange,
};
pub use social::{
    FacebookTool, InstagramPostsTool, InstagramProfileTool, LinkedinCompanyTool,
    LinkedinProfileTool, TwitterPostTool,
};
pub use web::ScrapeWebpageTool;

#[cfg(test)]
pub(crate) fn test_args(value: serde_json::Value) -> super::Arguments {
    match value {
        serde_json::Value::Object(map) => super::Arguments::from_json(Some(map)),
        other => panic!("test arguments must be an object, got {other}"),
    }
}
