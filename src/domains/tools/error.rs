//! Tool-specific error types.
//!
//! Every failed tool call ends in exactly one [`ToolError`]. The Transport
//! Adapter reports its own [`UpstreamError`], which is carried unchanged
//! inside [`ToolError::Upstream`].

use std::time::Duration;

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

/// The four outcome kinds a failed call can report to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    MethodNotFound,
    UpstreamError,
    InternalError,
}

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    /// Caller-supplied arguments failed validation.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// The requested tool is not part of the catalog.
    #[error("Unknown tool: {0}")]
    MethodNotFound(String),

    /// The scraping API failed, timed out, or could not be reached.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Anything not classified above.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create an "invalid params" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Create a "method not found" error for the given tool name.
    pub fn method_not_found(name: impl Into<String>) -> Self {
        Self::MethodNotFound(name.into())
    }

    /// Create an "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The outcome kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParams(_) => ErrorKind::InvalidParams,
            Self::MethodNotFound(_) => ErrorKind::MethodNotFound,
            Self::Upstream(_) => ErrorKind::UpstreamError,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// JSON-RPC error code used at the protocol boundary.
    ///
    /// Upstream failures are surfaced as internal errors; the upstream
    /// status and message stay in the error text.
    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            ErrorKind::InvalidParams => ErrorCode::INVALID_PARAMS,
            ErrorKind::MethodNotFound => ErrorCode::METHOD_NOT_FOUND,
            ErrorKind::UpstreamError | ErrorKind::InternalError => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::new(err.code(), err.to_string(), None)
    }
}

/// Failures reported by the Transport Adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// No response arrived within the configured limit.
    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),

    /// The scraping API answered with a non-success status.
    #[error("Upstream request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// DNS, connection, TLS or body read failure; no status available.
    #[error("Upstream transport error: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// Upstream HTTP status, when the remote service returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_codes() {
        let cases = [
            (ToolError::invalid_params("x"), ErrorKind::InvalidParams, ErrorCode::INVALID_PARAMS),
            (ToolError::method_not_found("x"), ErrorKind::MethodNotFound, ErrorCode::METHOD_NOT_FOUND),
            (
                ToolError::from(UpstreamError::Timeout(Duration::from_secs(60))),
                ErrorKind::UpstreamError,
                ErrorCode::INTERNAL_ERROR,
            ),
            (ToolError::internal("x"), ErrorKind::InternalError, ErrorCode::INTERNAL_ERROR),
        ];
        for (err, kind, code) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_upstream_status_message() {
        let err = ToolError::from(UpstreamError::Status {
            status: 401,
            message: "bad key".to_string(),
        });
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("bad key"));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = UpstreamError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_mcp_error_conversion() {
        let err: McpError = ToolError::method_not_found("nope").into();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(err.message.contains("nope"));
    }
}
