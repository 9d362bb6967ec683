//! Reusable predicates for primitive argument shapes.

use url::Url;

use super::error::ToolError;

/// Reject empty strings.
pub fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    if value.is_empty() {
        return Err(ToolError::invalid_params(format!(
            "'{field}' must not be empty"
        )));
    }
    Ok(value)
}

/// Require a well-formed absolute URL with an http(s) scheme and a host.
pub fn absolute_url(field: &str, value: &str) -> Result<Url, ToolError> {
    let url = Url::parse(non_empty(field, value)?).map_err(|e| {
        ToolError::invalid_params(format!("'{field}' must be a valid absolute URL: {e}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ToolError::invalid_params(format!(
            "'{field}' must be an http(s) URL with a host"
        )));
    }
    Ok(url)
}

/// Require `value` to be one of the declared literals.
pub fn one_of<'a>(field: &str, value: &'a str, allowed: &[&str]) -> Result<&'a str, ToolError> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ToolError::invalid_params(format!(
            "'{field}' must be one of [{}], got '{value}'",
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(non_empty("query", "rust").is_ok());
        assert_eq!(non_empty("query", " ").unwrap(), " ");
        let err = non_empty("query", "").unwrap_err();
        assert!(err.to_string().contains("'query'"));
    }

    #[test]
    fn test_absolute_url() {
        assert!(absolute_url("url", "https://example.com/page?x=1").is_ok());
        assert!(absolute_url("url", "http://localhost:8080").is_ok());
        assert!(absolute_url("url", "example.com").is_err());
        assert!(absolute_url("url", "/relative/path").is_err());
        assert!(absolute_url("url", "mailto:someone@example.com").is_err());
        assert!(absolute_url("url", "").is_err());
    }

    #[test]
    fn test_one_of() {
        let allowed = ["h", "d", "w", "m", "y"];
        assert_eq!(one_of("time_range", "w", &allowed).unwrap(), "w");
        let err = one_of("time_range", "week", &allowed).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("time_range"));
        assert!(text.contains("week"));
    }
}
