//! Tool Catalog - the fixed, ordered set of tools.
//!
//! Built once on first use and read-only afterwards. The order here is the
//! order clients see in `tools/list`.

use std::collections::HashMap;
use std::sync::LazyLock;

use rmcp::model::Tool;

use super::definitions::{
    AmazonProductSearchTool, AmazonReviewsTool, BingSearchTool, FacebookTool,
    GoogleAiSearchTool, GoogleMapsSearchTool, GoogleNewsSearchTool, GoogleSearchTool,
    IndeedJobsTool, InstagramPostsTool, InstagramProfileTool, LinkedinCompanyTool,
    LinkedinJobsTool, LinkedinProfileTool, ScrapeWebpageTool, TwitterPostTool,
    WalmartProductSearchTool,
};
use super::tool::ToolEntry;

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Ordered tool entries with a name index.
pub struct Catalog {
    entries: Vec<ToolEntry>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn build() -> Self {
        let entries = vec![
            ToolEntry::of::<ScrapeWebpageTool>(),
            ToolEntry::of::<GoogleSearchTool>(),
            ToolEntry::of::<GoogleAiSearchTool>(),
            ToolEntry::of::<BingSearchTool>(),
            ToolEntry::of::<GoogleMapsSearchTool>(),
            ToolEntry::of::<GoogleNewsSearchTool>(),
            ToolEntry::of::<AmazonProductSearchTool>(),
            ToolEntry::of::<AmazonReviewsTool>(),
            ToolEntry::of::<WalmartProductSearchTool>(),
            ToolEntry::of::<LinkedinProfileTool>(),
            ToolEntry::of::<LinkedinCompanyTool>(),
            ToolEntry::of::<LinkedinJobsTool>(),
            ToolEntry::of::<TwitterPostTool>(),
            ToolEntry::of::<InstagramProfileTool>(),
            ToolEntry::of::<InstagramPostsTool>(),
            ToolEntry::of::<FacebookTool>(),
            ToolEntry::of::<IndeedJobsTool>(),
        ];

        let index: HashMap<_, _> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name(), i))
            .collect();
        debug_assert_eq!(index.len(), entries.len(), "duplicate tool name in catalog");

        Self { entries, index }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Tool metadata in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool().clone()).collect()
    }

    /// Tool names in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
