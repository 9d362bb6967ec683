//! Job board tools: LinkedIn Jobs and Indeed.

use schemars::JsonSchema;

use crate::domains::tools::{Arguments, ScraperTool, ToolError, TranslatedRequest};

/// Parameters for LinkedIn job search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct LinkedinJobsParams {
    /// Job title or keywords.
    pub query: String,

    /// City, region or country to search in.
    pub location: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Result page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct LinkedinJobsTool;

impl ScraperTool for LinkedinJobsTool {
    const NAME: &'static str = "linkedin_jobs_search";

    const DESCRIPTION: &'static str = "Search LinkedIn job postings by keywords and location. \
         Returns job titles, companies, locations and links as JSON.";

    const ENDPOINT: &'static str = "/linkedin-jobs";

    type Params = LinkedinJobsParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(LinkedinJobsParams {
            query: args.required_str("query")?,
            location: args.required_str("location")?,
            api_key: args.required_str("api_key")?,
            page: args.optional_u32("page")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .param("location", &params.location)
            .optional("page", params.page)
    }
}

/// Parameters for Indeed job search.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct IndeedJobsParams {
    /// Job title or keywords.
    pub query: String,

    /// City, region or postal code to search in.
    pub location: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Indeed country site code (e.g. "us", "uk").
    pub country: Option<String>,

    /// Result page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct IndeedJobsTool;

impl ScraperTool for IndeedJobsTool {
    const NAME: &'static str = "indeed_jobs_search";

    const DESCRIPTION: &'static str = "Search Indeed job listings by keywords and location. \
         Returns job titles, companies, salaries and links as JSON.";

    const ENDPOINT: &'static str = "/indeed";

    type Params = IndeedJobsParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(IndeedJobsParams {
            query: args.required_str("query")?,
            location: args.required_str("location")?,
            api_key: args.required_str("api_key")?,
            country: args.optional_str("country")?,
            page: args.optional_u32("page")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("query", &params.query)
            .param("location", &params.location)
            .optional("country", params.country.as_deref())
            .optional("page", params.page)
    }
}
