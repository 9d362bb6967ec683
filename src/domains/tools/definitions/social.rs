//! Social media tools: LinkedIn profiles and companies, Twitter/X posts,
//! Instagram profiles and posts, Facebook pages.

use schemars::JsonSchema;

use crate::domains::tools::{Arguments, ScraperTool, ToolError, TranslatedRequest};

// ============================================================================
// LinkedIn
// ============================================================================

/// Parameters for scraping a LinkedIn member profile.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct LinkedinProfileParams {
    /// Full URL of the LinkedIn profile (e.g. "https://www.linkedin.com/in/someone").
    pub profile_url: String,

    /// API key for the scraping service.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct LinkedinProfileTool;

impl ScraperTool for LinkedinProfileTool {
    const NAME: &'static str = "linkedin_profile_scraper";

    const DESCRIPTION: &'static str = "Scrape a public LinkedIn profile. \
         Returns name, headline, experience, education and other public fields as JSON.";

    const ENDPOINT: &'static str = "/linkedin-profile";

    type Params = LinkedinProfileParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(LinkedinProfileParams {
            profile_url: args.required_url("profile_url")?,
            api_key: args.required_str("api_key")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("profile_url", &params.profile_url)
    }
}

/// Parameters for scraping a LinkedIn company page.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct LinkedinCompanyParams {
    /// Full URL of the LinkedIn company page (e.g. "https://www.linkedin.com/company/acme").
    pub company_url: String,

    /// API key for the scraping service.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct LinkedinCompanyTool;

impl ScraperTool for LinkedinCompanyTool {
    const NAME: &'static str = "linkedin_company_scraper";

    const DESCRIPTION: &'static str = "Scrape a public LinkedIn company page. \
         Returns description, industry, size, headquarters and related data as JSON.";

    const ENDPOINT: &'static str = "/linkedin-company";

    type Params = LinkedinCompanyParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(LinkedinCompanyParams {
            company_url: args.required_url("company_url")?,
            api_key: args.required_str("api_key")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("company_url", &params.company_url)
    }
}

// ============================================================================
// Twitter / X
// ============================================================================

/// Parameters for user post listings (Twitter, Instagram).
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct UserPostsParams {
    /// Account username, without the leading "@".
    pub username: String,

    /// API key for the scraping service.
    pub api_key: String,

    /// Maximum number of posts to return.
    pub count: Option<u32>,
}

impl UserPostsParams {
    fn from_args(args: &Arguments) -> Result<Self, ToolError> {
        Ok(Self {
            username: args.required_str("username")?,
            api_key: args.required_str("api_key")?,
            count: args.optional_u32("count")?,
        })
    }

    fn to_request(&self, endpoint: &'static str) -> TranslatedRequest {
        TranslatedRequest::new(endpoint)
            .param("api_key", &self.api_key)
            .param("username", &self.username)
            .optional("count", self.count)
    }
}

#[derive(Debug, Clone)]
pub struct TwitterPostTool;

impl ScraperTool for TwitterPostTool {
    const NAME: &'static str = "twitter_post_scraper";

    const DESCRIPTION: &'static str = "Scrape recent posts from a Twitter/X account. \
         Returns post text, timestamps and engagement counts as JSON.";

    const ENDPOINT: &'static str = "/twitter";

    type Params = UserPostsParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        UserPostsParams::from_args(args)
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        params.to_request(Self::ENDPOINT)
    }
}

// ============================================================================
// Instagram
// ============================================================================

/// Parameters for scraping an Instagram profile.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct InstagramProfileParams {
    /// Instagram username, without the leading "@".
    pub username: String,

    /// API key for the scraping service.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct InstagramProfileTool;

impl ScraperTool for InstagramProfileTool {
    const NAME: &'static str = "instagram_profile_scraper";

    const DESCRIPTION: &'static str = "Scrape a public Instagram profile. \
         Returns bio, follower and following counts, and profile details as JSON.";

    const ENDPOINT: &'static str = "/instagram-profile";

    type Params = InstagramProfileParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(InstagramProfileParams {
            username: args.required_str("username")?,
            api_key: args.required_str("api_key")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("username", &params.username)
    }
}

#[derive(Debug, Clone)]
pub struct InstagramPostsTool;

impl ScraperTool for InstagramPostsTool {
    const NAME: &'static str = "instagram_posts_scraper";

    const DESCRIPTION: &'static str = "Scrape recent posts from a public Instagram account. \
         Returns captions, media links, likes and comment counts as JSON.";

    const ENDPOINT: &'static str = "/instagram-posts";

    type Params = UserPostsParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        UserPostsParams::from_args(args)
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        params.to_request(Self::ENDPOINT)
    }
}

// ============================================================================
// Facebook
// ============================================================================

/// Parameters for scraping a Facebook page.
#[derive(Debug, Clone, PartialEq, JsonSchema)]
pub struct FacebookParams {
    /// Full URL of the public Facebook page or profile.
    pub url: String,

    /// API key for the scraping service.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct FacebookTool;

impl ScraperTool for FacebookTool {
    const NAME: &'static str = "facebook_scraper";

    const DESCRIPTION: &'static str =
        "Scrape a public Facebook page or profile by URL and return its public data as JSON.";

    const ENDPOINT: &'static str = "/facebook";

    type Params = FacebookParams;

    fn validate(args: &Arguments) -> Result<Self::Params, ToolError> {
        Ok(FacebookParams {
            url: args.required_url("url")?,
            api_key: args.required_str("api_key")?,
        })
    }

    fn translate(params: &Self::Params) -> TranslatedRequest {
        TranslatedRequest::new(Self::ENDPOINT)
            .param("api_key", &params.api_key)
            .param("url", &params.url)
    }
}
