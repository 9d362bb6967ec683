//! Generic web page scraping tool.
//!
//! The only tool that targets the API base URL itself rather than a named
//! endpoint. The page body is returned as-is (usually HTML).

use schemars::JsonSchema;

use crate::domains::tools::{Arguments, ScraperTool, ToolError, TranslatedRequest};

/// Parameters for scraping a single web page.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct ScrapeWebpageParams {
    /// Absolute http(s) URL of the page to scrape.
    pub url: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Render the page in a headless browser before returning it.
    pub dynamic: Option<bool>,

    /// Route the request through premium residential proxies.
    pub premium: Option<bool>,

    /// Two-letter country code for geo-targeted proxies (e.g. "us").
    pub country: Option<String>,

    /// Milliseconds to wait after page load when rendering dynamically.
    pub wait: Option<u32>,

    /// Output format requested from the service (e.g. "html", "markdown").
    pub format: Option<String>,
}

/// Scrape any web page.
#[derive(Debug, Clone)]
pub struct ScrapeWebpageTool;

impl ScraperTool for ScrapeWebpageTool {
    const NAME: &'static str = "scrape_webpage";

    const DESCRIPTION: &'static str = "Scrape the content of any web page by URL. \
         Optionally renders JavaScript in a headless browser, uses premium proxies, \
         targets a country, and waits before capturing. Returns the raw page content.";

    const ENDPOINT: &'static str = "";

    type Params = ScrapeWebpageParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(ScrapeWebpageParams {
            url: args.required_url("url")?,
            api_key: args.required_str("api_key")?,
            dynamic: args.optional_bool("dynamic")?,
            premium: args.optional_bool("premium")?,
            country: args.optional_str("country")?,
            wait: args.optional_u32("wait")?,
            format: args.optional_str("format")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("url", &params.url)
            .optional("dynamic", params.dynamic)
            .optional("premium", params.premium)
            .optional("country", params.country.as_deref())
            .optional("wait", params.wait)
            .optional("format", params.format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ArgValue;
    use crate::domains::tools::definitions::test_args;
    use serde_json::json;

    #[test]
    fn test_scrape_minimal() {
        let args = test_args(json!({ "url": "https://example.com", "api_key": "k" }));
        let params = ScrapeWebpageTool::validate(&args).unwrap();
        let request = ScrapeWebpageTool::translate(&params);

        assert_eq!(request.endpoint_path(), "");
        assert_eq!(request.query().len(), 2);
        assert_eq!(
            request.query().get("url"),
            Some(&ArgValue::from("https://example.com"))
        );
    }

    #[test]
    fn test_scrape_forwards_falsy_optionals() {
        let args = test_args(json!({
            "url": "https://example.com",
            "api_key": "k",
            "dynamic": false,
            "wait": 0,
        }));
        let request = ScrapeWebpageTool::translate(&ScrapeWebpageTool::validate(&args).unwrap());

        assert_eq!(request.query().get("dynamic"), Some(&ArgValue::from(false)));
        assert_eq!(request.query().get("wait"), Some(&ArgValue::from(0u32)));
        assert!(request.query().get("premium").is_none());
    }

    #[test]
    fn test_scrape_rejects_relative_url() {
        let args = test_args(json!({ "url": "/just/a/path", "api_key": "k" }));
        let err = ScrapeWebpageTool::validate(&args).unwrap_err();
        assert!(err.to_string().contains("'url'"));
    }

    #[test]
    fn test_scrape_rejects_string_wait() {
        let args = test_args(json!({
            "url": "https://example.com",
            "api_key": "k",
            "wait": "5000",
        }));
        let err = ScrapeWebpageTool::validate(&args).unwrap_err();
        assert!(err.to_string().contains("'wait'"));
    }
}
