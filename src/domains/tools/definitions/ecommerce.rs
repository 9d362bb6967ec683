//! E-commerce tools: Amazon product search and reviews, Walmart search.

use schemars::JsonSchema;

use crate::domains::tools::{Arguments, ScraperTool, ToolError, TranslatedRequest};

// ============================================================================
// Amazon Product Search
// ============================================================================

/// Parameters for Amazon product search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct AmazonProductSearchParams {
    /// Product search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Amazon marketplace country code (e.g. "us", "de", "in").
    pub country: Option<String>,

    /// Result page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct AmazonProductSearchTool;

impl ScraperTool for AmazonProductSearchTool {
    const NAME: &'static str = "amazon_product_search";

    const DESCRIPTION: &'static str = "Search Amazon products by keyword. \
         Returns titles, ASINs, prices, ratings and links as JSON for the chosen marketplace.";

    const ENDPOINT: &'static str = "/amazon";

    type Params = AmazonProductSearchParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(AmazonProductSearchParams {
            query: args.required_str("query")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            page: args.optional_u32("page")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .optional("country", params.country.as_deref())
            .optional("page", params.page)
    }
}

// ============================================================================
// Amazon Reviews
// ============================================================================

/// Parameters for fetching Amazon product reviews.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct AmazonReviewsParams {
    /// Amazon Standard Identification Number of the product (e.g. "B08N5WRWNW").
    pub asin: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Amazon marketplace country code (e.g. "us").
    pub country: Option<String>,

    /// Review page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct AmazonReviewsTool;

impl ScraperTool for AmazonReviewsTool {
    const NAME: &'static str = "amazon_reviews";

    const DESCRIPTION: &'static str = "Fetch customer reviews for an Amazon product by ASIN. \
         Returns review text, ratings, authors and dates as JSON.";

    const ENDPOINT: &'static str = "/amazon-reviews";

    type Params = AmazonReviewsParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(AmazonReviewsParams {
            asin: args.required_str("asin")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            page: args.optional_u32("page")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("asin", &params.asin)
            .optional("country", params.country.as_deref())
            .optional("page", params.page)
    }
}

// ============================================================================
// Walmart Product Search
// ============================================================================

/// Parameters for Walmart product search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct WalmartProductSearchParams {
    /// Product search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Result page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct WalmartProductSearchTool;

impl ScraperTool for WalmartProductSearchTool {
    const NAME: &'static str = "walmart_product_search";

    const DESCRIPTION: &'static str =
        "Search Walmart products by keyword. Returns titles, prices, ratings and links as JSON.";

    const ENDPOINT: &'static str = "/walmart";

    type Params = WalmartProductSearchParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(WalmartProductSearchParams {
            query: args.required_str("query")?,
            api_key: args.required_str("api_key")?,
            page: args.optional_u32("page")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .optional("page", params.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ArgValue;
    use crate::domains::tools::definitions::test_args;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_amazon_reviews_translation() {
        let args = test_args(json!({ "asin": "B08N5WRWNW", "api_key": "k" }));
        let request = AmazonReviewsTool::translate(&AmazonReviewsTool::validate(&args).unwrap());

        let expected: BTreeMap<&str, ArgValue> = [
            ("api_key", ArgValue::from("k")),
            ("asin", ArgValue::from("B08N5WRWNW")),
        ]
        .into_iter()
        .collect();

        assert_eq!(request.endpoint_path(), "/amazon-reviews");
        assert_eq!(request.query(), &expected);
    }

    #[test]
    fn test_amazon_reviews_requires_asin() {
        let args = test_args(json!({ "api_key": "k", "asin": "" }));
        let err = AmazonReviewsTool::validate(&args).unwrap_err();
        assert!(err.to_string().contains("'asin'"));
    }

    #[test]
    fn test_amazon_product_search_optionals() {
        let args = test_args(json!({
            "query": "headphones",
            "api_key": "k",
            "country": "de",
            "page": 3,
        }));
        let request =
            AmazonProductSearchTool::translate(&AmazonProductSearchTool::validate(&args).unwrap());

        assert_eq!(request.endpoint_path(), "/amazon");
        assert_eq!(request.query().get("country"), Some(&ArgValue::from("de")));
        assert_eq!(request.query().get("page"), Some(&ArgValue::from(3u32)));
    }

    #[test]
    fn test_walmart_has_no_country() {
        let args = test_args(json!({ "query": "tv", "api_key": "k", "country": "us" }));
        let request =
            WalmartProductSearchTool::translate(&WalmartProductSearchTool::validate(&args).unwrap());

        assert_eq!(request.endpoint_path(), "/walmart");
        assert!(request.query().get("country").is_none());
    }

    #[test]
    fn test_walmart_rejects_negative_page() {
        let args = test_args(json!({ "query": "tv", "api_key": "k", "page": -1 }));
        assert!(WalmartProductSearchTool::validate(&args).is_err());
    }
}
