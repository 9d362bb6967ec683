//! Transport Adapter for the scraping API.
//!
//! One GET per call against `base_url + endpoint_path`, bounded by a
//! timeout. Failures are normalized into [`UpstreamError`]; successful
//! bodies are returned untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::core::config::UpstreamConfig;

use super::error::{ToolError, UpstreamError};
use super::request::TranslatedRequest;

/// Executes translated requests against the external service.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Issue the request and return the raw response body.
    async fn execute(&self, request: &TranslatedRequest) -> Result<String, UpstreamError>;
}

/// Error body shape returned by the scraping API on failures.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// reqwest-backed [`Upstream`].
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpUpstream {
    /// Build a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ToolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Build from configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ToolError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// Full URL for an endpoint path; an empty path targets the base URL.
    pub fn endpoint_url(&self, endpoint_path: &str) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint_path
        )
    }

    /// Normalize a reqwest failure. The request URL is stripped because its
    /// query string carries the caller's `api_key`.
    fn classify(&self, err: reqwest::Error) -> UpstreamError {
        let err = err.without_url();
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else if err.is_connect() {
            UpstreamError::Transport(format!("Connection failed: {err}"))
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    #[instrument(skip_all, fields(endpoint = request.endpoint_path()))]
    async fn execute(&self, request: &TranslatedRequest) -> Result<String, UpstreamError> {
        let url = self.endpoint_url(request.endpoint_path());
        debug!("GET {}?{}", url, request.redacted_query());

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            warn!("Upstream returned {}: {}", status, message);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Upstream response received: {} bytes", body.len());
        Ok(body)
    }
}

/// Pull the human-readable message out of an upstream error body, if any.
fn upstream_message(body: &str) -> Option<String> {
    let parsed: UpstreamErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}
