//! Argument bag handed to the tools.
//!
//! Raw JSON arguments are narrowed to a closed set of scalar values before
//! any tool sees them. The typed readers on [`Arguments`] are what the
//! per-tool validators are written with; each error names the offending
//! field.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rmcp::model::JsonObject;
use serde_json::{Number, Value};

use super::error::ToolError;
use super::validators::{absolute_url, non_empty, one_of};

/// A scalar argument or query value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Number(Number),
    Bool(bool),
}

impl ArgValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Caller-supplied arguments, narrowed to scalars.
///
/// JSON `null` counts as absent. Arrays and objects are remembered by name
/// only; reading one through a typed reader is an error, while keys no tool
/// reads are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: BTreeMap<String, ArgValue>,
    nested: BTreeSet<String>,
}

impl Arguments {
    /// Narrow a raw JSON argument object.
    pub fn from_json(arguments: Option<JsonObject>) -> Self {
        let mut args = Self::default();

        for (name, value) in arguments.unwrap_or_default() {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => ArgValue::Text(s),
                Value::Number(n) => ArgValue::Number(n),
                Value::Bool(b) => ArgValue::Bool(b),
                Value::Array(_) | Value::Object(_) => {
                    args.nested.insert(name);
                    continue;
                }
            };
            args.values.insert(name, value);
        }

        args
    }

    /// The scalar value under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Like [`get`](Self::get), but an array or object under `name` is an error.
    fn scalar(&self, name: &str) -> Result<Option<&ArgValue>, ToolError> {
        if self.nested.contains(name) {
            return Err(ToolError::invalid_params(format!(
                "'{name}' must be a string, number or boolean"
            )));
        }
        Ok(self.get(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A required non-empty string.
    pub fn required_str(&self, name: &str) -> Result<String, ToolError> {
        self.optional_str(name)?.ok_or_else(|| missing(name))
    }

    /// An optional string; when present it must be non-empty.
    pub fn optional_str(&self, name: &str) -> Result<Option<String>, ToolError> {
        match self.scalar(name)? {
            None => Ok(None),
            Some(ArgValue::Text(s)) => Ok(Some(non_empty(name, s)?.to_string())),
            Some(other) => Err(wrong_type(name, "string", other)),
        }
    }

    /// A required absolute http(s) URL, returned exactly as supplied.
    pub fn required_url(&self, name: &str) -> Result<String, ToolError> {
        let raw = self.required_str(name)?;
        absolute_url(name, &raw)?;
        Ok(raw)
    }

    /// An optional string restricted to the declared literals.
    pub fn optional_enum(
        &self,
        name: &str,
        allowed: &[&str],
    ) -> Result<Option<String>, ToolError> {
        self.optional_str(name)?
            .map(|s| one_of(name, &s, allowed).map(str::to_string))
            .transpose()
    }

    /// An optional non-negative integer. No string-to-number coercion.
    pub fn optional_u32(&self, name: &str) -> Result<Option<u32>, ToolError> {
        match self.scalar(name)? {
            None => Ok(None),
            Some(ArgValue::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| {
                    ToolError::invalid_params(format!(
                        "'{name}' must be a non-negative integer, got {n}"
                    ))
                }),
            Some(other) => Err(wrong_type(name, "integer", other)),
        }
    }

    /// An optional boolean.
    pub fn optional_bool(&self, name: &str) -> Result<Option<bool>, ToolError> {
        match self.scalar(name)? {
            None => Ok(None),
            Some(ArgValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(wrong_type(name, "boolean", other)),
        }
    }
}

fn missing(name: &str) -> ToolError {
    ToolError::invalid_params(format!("Missing required parameter '{name}'"))
}

fn wrong_type(name: &str, expected: &str, got: &ArgValue) -> ToolError {
    ToolError::invalid_params(format!(
        "'{name}' must be a {expected}, got {}",
        got.type_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => Arguments::from_json(Some(map)),
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_from_json_skips_null() {
        let a = args(json!({ "query": "ai", "page": null }));
        assert_eq!(a.len(), 1);
        assert!(a.get("page").is_none());
    }

    #[test]
    fn test_nested_value_rejected_when_read() {
        let a = args(json!({ "query": ["a", "b"], "page": { "n": 1 } }));
        assert!(a.is_empty());

        let err = a.required_str("query").unwrap_err();
        assert!(err.to_string().contains("'query'"));
        assert!(err.to_string().contains("string, number or boolean"));
        assert_err!(a.optional_u32("page"));
    }

    #[test]
    fn test_unread_nested_value_is_ignored() {
        let a = args(json!({ "query": "ai", "extra": [1, 2], "meta": { "k": "v" } }));
        assert_eq!(a.len(), 1);
        assert_eq!(a.required_str("query").unwrap(), "ai");
    }

    #[test]
    fn test_from_json_none_is_empty() {
        let a = Arguments::from_json(None);
        assert!(a.is_empty());
    }

    #[test]
    fn test_required_str() {
        let a = args(json!({ "query": "ai", "blank": "", "num": 3 }));
        assert_eq!(a.required_str("query").unwrap(), "ai");

        let missing = a.required_str("api_key").unwrap_err();
        assert!(missing.to_string().contains("'api_key'"));

        assert_err!(a.required_str("blank"));
        let wrong = a.required_str("num").unwrap_err();
        assert!(wrong.to_string().contains("must be a string"));
    }

    #[test]
    fn test_optional_u32_no_coercion() {
        let a = args(json!({ "page": 0, "num": "10", "neg": -1, "frac": 1.5 }));
        assert_eq!(a.optional_u32("page").unwrap(), Some(0));
        assert_eq!(a.optional_u32("absent").unwrap(), None);
        assert_err!(a.optional_u32("num"));
        assert_err!(a.optional_u32("neg"));
        assert_err!(a.optional_u32("frac"));
    }

    #[test]
    fn test_optional_bool() {
        let a = args(json!({ "dynamic": false, "premium": "yes" }));
        assert_eq!(a.optional_bool("dynamic").unwrap(), Some(false));
        assert_err!(a.optional_bool("premium"));
    }

    #[test]
    fn test_optional_enum() {
        let a = args(json!({ "time_range": "d", "bad": "x" }));
        let allowed = ["h", "d", "w", "m", "y"];
        assert_eq!(
            a.optional_enum("time_range", &allowed).unwrap().as_deref(),
            Some("d")
        );
        assert_err!(a.optional_enum("bad", &allowed));
        assert_ok!(a.optional_enum("absent", &allowed));
    }

    #[test]
    fn test_required_url() {
        let a = args(json!({ "url": "https://example.com", "bad": "not a url" }));
        assert_eq!(a.required_url("url").unwrap(), "https://example.com");
        assert_err!(a.required_url("bad"));
    }

    #[test]
    fn test_display_values() {
        assert_eq!(ArgValue::from("x").to_string(), "x");
        assert_eq!(ArgValue::from(0u32).to_string(), "0");
        assert_eq!(ArgValue::from(false).to_string(), "false");
    }
}
