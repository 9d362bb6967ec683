//! Outbound request description produced by the Request Translator.

use std::collections::BTreeMap;

use super::args::ArgValue;

/// Query keys whose values never appear in logs.
const REDACTED_KEYS: &[&str] = &["api_key"];

/// Endpoint path plus query parameters for one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedRequest {
    endpoint_path: &'static str,
    query: BTreeMap<&'static str, ArgValue>,
}

impl TranslatedRequest {
    /// Start a request against `endpoint_path` (empty for the base URL).
    pub fn new(endpoint_path: &'static str) -> Self {
        Self {
            endpoint_path,
            query: BTreeMap::new(),
        }
    }

    /// Add a parameter that is always forwarded.
    pub fn param(mut self, key: &'static str, value: impl Into<ArgValue>) -> Self {
        self.query.insert(key, value.into());
        self
    }

    /// Add a parameter only when it was supplied.
    pub fn optional<V: Into<ArgValue>>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.insert(key, value.into());
        }
        self
    }

    pub fn endpoint_path(&self) -> &'static str {
        self.endpoint_path
    }

    pub fn query(&self) -> &BTreeMap<&'static str, ArgValue> {
        &self.query
    }

    /// Query parameters rendered as string pairs, ready for the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.query
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }

    /// URL-encoded query string with credentials masked, for logging.
    pub fn redacted_query(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| {
                if REDACTED_KEYS.contains(&k) {
                    (k, "REDACTED".to_string())
                } else {
                    (k, v)
                }
            })
            .collect();
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_absent_is_skipped() {
        let req = TranslatedRequest::new("/google")
            .param("query", "ai")
            .optional::<u32>("page", None)
            .optional("num", Some(0u32));
        assert_eq!(req.query().len(), 2);
        assert_eq!(req.query().get("num"), Some(&ArgValue::from(0u32)));
    }

    #[test]
    fn test_redacted_query_hides_api_key() {
        let req = TranslatedRequest::new("/google")
            .param("api_key", "secret-key")
            .param("query", "rust lang");
        let logged = req.redacted_query();
        assert!(!logged.contains("secret-key"));
        assert!(logged.contains("api_key=REDACTED"));
        assert!(logged.contains("query=rust+lang"));
    }

    #[test]
    fn test_query_pairs_are_sorted_and_stringified() {
        let req = TranslatedRequest::new("")
            .param("url", "https://example.com")
            .param("dynamic", false)
            .param("api_key", "k");
        assert_eq!(
            req.query_pairs(),
            vec![
                ("api_key", "k".to_string()),
                ("dynamic", "false".to_string()),
                ("url", "https://example.com".to_string()),
            ]
        );
    }
}
