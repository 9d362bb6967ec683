//! Search engine tools: Google (web, AI, Maps, News) and Bing.

use schemars::JsonSchema;

use crate::domains::tools::{Arguments, ScraperTool, ToolError, TranslatedRequest};

// ============================================================================
// Shared Parameters
// ============================================================================

/// Query plus locale, shared by the tools that take nothing else.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct LocalizedQueryParams {
    /// Search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Country code used to localize results (e.g. "us").
    pub country: Option<String>,

    /// Interface language code (e.g. "en").
    pub language: Option<String>,
}

impl LocalizedQueryParams {
    fn from_args(args: &Arguments) -> Result<Self, ToolError> {
        Ok(Self {
            query: args.required_str("query")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            language: args.optional_str("language")?,
        })
    }

    fn to_request(&self, endpoint: &'static str) -> TranslatedRequest {
        TranslatedRequest::new(endpoint)
            .param("api_key", &self.api_key)
            .param("query", &self.query)
            .optional("country", self.country.as_deref())
            .optional("language", self.language.as_deref())
    }
}

// ============================================================================
// Google Search
// ============================================================================

/// Parameters for Google web search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct GoogleSearchParams {
    /// Search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Country code used to localize results (e.g. "us").
    pub country: Option<String>,

    /// Interface language code (e.g. "en").
    pub language: Option<String>,

    /// Result page, starting at 0.
    pub page: Option<u32>,

    /// Number of results per page.
    pub num: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GoogleSearchTool;

impl ScraperTool for GoogleSearchTool {
    const NAME: &'static str = "google_search";

    const DESCRIPTION: &'static str = "Search Google and return the organic results page as JSON. \
         Supports country and language localization and pagination.";

    const ENDPOINT: &'static str = "/google";

    type Params = GoogleSearchParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(GoogleSearchParams {
            query: args.required_str("query")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            language: args.optional_str("language")?,
            page: args.optional_u32("page")?,
            num: args.optional_u32("num")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .optional("country", params.country.as_deref())
            .optional("language", params.language.as_deref())
            .optional("page", params.page)
            .optional("num", params.num)
    }
}

// ============================================================================
// Google AI Search
// ============================================================================

#[derive(Debug, Clone)]
pub struct GoogleAiSearchTool;

impl ScraperTool for GoogleAiSearchTool {
    const NAME: &'static str = "google_ai_search";

    const DESCRIPTION: &'static str =
        "Run a Google AI Mode query and return the AI-generated overview with its cited sources.";

    const ENDPOINT: &'static str = "/google-ai";

    type Params = LocalizedQueryParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        LocalizedQueryParams::from_args(args)
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        params.to_request(Self::ENDPOINT)
    }
}

// ============================================================================
// Bing Search
// ============================================================================

/// Parameters for Bing web search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct BingSearchParams {
    /// Search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Country code used to localize results (e.g. "us").
    pub country: Option<String>,

    /// Result page, starting at 0.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct BingSearchTool;

impl ScraperTool for BingSearchTool {
    const NAME: &'static str = "bing_search";

    const DESCRIPTION: &'static str =
        "Search Bing and return the organic results page as JSON, with optional country and page.";

    const ENDPOINT: &'static str = "/bing";

    type Params = BingSearchParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(BingSearchParams {
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
// Google Maps Search
// ============================================================================

#[derive(Debug, Clone)]
pub struct GoogleMapsSearchTool;

impl ScraperTool for GoogleMapsSearchTool {
    const NAME: &'static str = "google_maps_search";

    const DESCRIPTION: &'static str = "Search Google Maps for places and businesses. \
         Returns names, addresses, ratings, and contact details as JSON.";

    const ENDPOINT: &'static str = "/google-maps";

    type Params = LocalizedQueryParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        LocalizedQueryParams::from_args(args)
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        params.to_request(Self::ENDPOINT)
    }
}

// ============================================================================
// Google News Search
// ============================================================================

/// Publication time window for news results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub enum TimeRange {
    /// Past hour
    #[serde(rename = "h")]
    Hour,
    /// Past day
    #[serde(rename = "d")]
    Day,
    /// Past week
    #[serde(rename = "w")]
    Week,
    /// Past month
    #[serde(rename = "m")]
    Month,
    /// Past year
    #[serde(rename = "y")]
    Year,
}

impl TimeRange {
    /// Accepted literal codes, in declaration order.
    pub const CODES: &'static [&'static str] = &["h", "d", "w", "m", "y"];

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "m",
            Self::Year => "y",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "h" => Some(Self::Hour),
            "d" => Some(Self::Day),
            "w" => Some(Self::Week),
            "m" => Some(Self::Month),
            "y" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Parameters for Google News search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct GoogleNewsSearchParams {
    /// News search query.
    pub query: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Country code used to localize results (e.g. "us").
    pub country: Option<String>,

    /// Interface language code (e.g. "en").
    pub language: Option<String>,

    /// Only return articles from the past hour (h), day (d), week (w), month (m) or year (y).
    pub time_range: Option<TimeRange>,
}

#[derive(Debug, Clone)]
pub struct GoogleNewsSearchTool;

impl ScraperTool for GoogleNewsSearchTool {
    const NAME: &'static str = "google_news_search";

    const DESCRIPTION: &'static str = "Search Google News for recent articles. \
         Supports localization and restricting results to a time range (h, d, w, m, y).";

    const ENDPOINT: &'static str = "/google-news";

    type Params = GoogleNewsSearchParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(GoogleNewsSearchParams {
            query: args.required_str("query")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            language: args.optional_str("language")?,
            time_range: args
                .optional_enum("time_range", TimeRange::CODES)?
                .and_then(|code| TimeRange::from_code(&code)),
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .optional("country", params.country.as_deref())
            .optional("language", params.language.as_deref())
            .optional("time_range", params.time_range.map(TimeRange::as_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_args;
    use crate::domains::tools::{ArgValue, ErrorKind};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn prepare<T: ScraperTool>(value: serde_json::Value) -> Result<TranslatedRequest, ToolError> {
        T::validate(&test_args(value)).map(|p| T::translate(&p))
    }

    #[test]
    fn test_google_search_translation() {
        let request =
            prepare::<GoogleSearchTool>(json!({ "query": "ai", "api_key": "k", "country": "US" }))
                .unwrap();

        let expected: BTreeMap<&str, ArgValue> = [
            ("api_key", ArgValue::from("k")),
            ("query", ArgValue::from("ai")),
            ("country", ArgValue::from("US")),
        ]
        .into_iter()
        .collect();

        assert_eq!(request.endpoint_path(), "/google");
        assert_eq!(request.query(), &expected);
    }

    #[test]
    fn test_google_search_forwards_page_zero() {
        let request = prepare::<GoogleSearchTool>(
            json!({ "query": "ai", "api_key": "k", "page": 0, "num": 20 }),
        )
        .unwrap();
        assert_eq!(request.query().get("page"), Some(&ArgValue::from(0u32)));
        assert_eq!(request.query().get("num"), Some(&ArgValue::from(20u32)));
    }

    #[test]
    fn test_google_search_missing_query() {
        let err = prepare::<GoogleSearchTool>(json!({ "api_key": "k" })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParams);
        assert!(err.to_string().contains("'query'"));
    }

    #[test]
    fn test_google_ai_and_maps_use_their_own_endpoints() {
        let args = json!({ "query": "coffee", "api_key": "k", "language": "en" });
        let ai = prepare::<GoogleAiSearchTool>(args.clone()).unwrap();
        let maps = prepare::<GoogleMapsSearchTool>(args).unwrap();

        assert_eq!(ai.endpoint_path(), "/google-ai");
        assert_eq!(maps.endpoint_path(), "/google-maps");
        assert_eq!(ai.query(), maps.query());
    }

    #[test]
    fn test_bing_ignores_language() {
        let request = prepare::<BingSearchTool>(
            json!({ "query": "rust", "api_key": "k", "language": "fr", "page": 2 }),
        )
        .unwrap();
        assert_eq!(request.endpoint_path(), "/bing");
        assert!(request.query().get("language").is_none());
        assert_eq!(request.query().get("page"), Some(&ArgValue::from(2u32)));
    }

    #[test]
    fn test_google_news_time_range() {
        let request = prepare::<GoogleNewsSearchTool>(
            json!({ "query": "elections", "api_key": "k", "time_range": "w" }),
        )
        .unwrap();
        assert_eq!(request.endpoint_path(), "/google-news");
        assert_eq!(request.query().get("time_range"), Some(&ArgValue::from("w")));
    }

    #[test]
    fn test_google_news_rejects_unknown_time_range() {
        let err = prepare::<GoogleNewsSearchTool>(
            json!({ "query": "elections", "api_key": "k", "time_range": "week" }),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParams);
        assert!(err.to_string().contains("time_range"));
    }

    #[test]
    fn test_time_range_codes_round_trip() {
        for code in TimeRange::CODES {
            let range = TimeRange::from_code(code).unwrap();
            assert_eq!(range.as_code(), *code);
        }
    }

    #[test]
    fn test_time_range_schema_uses_codes() {
        let schema = serde_json::to_string(&GoogleNewsSearchTool::to_tool().input_schema).unwrap();
        for code in TimeRange::CODES {
            assert!(schema.contains(&format!("\"{code}\"")), "{code} missing from {schema}");
        }
        assert!(!schema.contains("\"Hour\""));
    }
}
