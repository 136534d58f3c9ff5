//! Error type definitions.
//!
//! This module defines the error taxonomy used throughout the application:
//! initialization failures, the closed set of lookup error kinds, and the
//! `ErrorDescriptor` surfaced to callers.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{INVALID_INPUT_MESSAGE, MAX_RAW_SNIPPET_CHARS};
use crate::utils::sanitize::{sanitize_and_truncate_error_message, truncate_snippet};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured upstream endpoint is not a usable base URL.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrlError {
        /// The rejected URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Closed set of failure kinds a lookup request can end in.
///
/// `InvalidInput` comes from the classifier and never reaches the network;
/// the remaining kinds come from the upstream call, in the priority order
/// they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The classifier rejected the text
    InvalidInput,
    /// Connection refused, DNS failure, timeout
    Transport,
    /// Upstream status other than 200
    HttpStatus,
    /// 200 with no body
    EmptyResponse,
    /// Body is not a JSON object
    MalformedJson,
    /// Payload carried a failure flag
    ApplicationError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a human-readable label for the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid input",
            ErrorKind::Transport => "Transport error",
            ErrorKind::HttpStatus => "HTTP status error",
            ErrorKind::EmptyResponse => "Empty response",
            ErrorKind::MalformedJson => "Malformed JSON",
            ErrorKind::ApplicationError => "API error",
        }
    }
}

/// A structured failure record: kind, human message and an optional,
/// bounded snippet of the raw upstream body for diagnostic display.
///
/// The snippet is never parsed further and never exceeds
/// `MAX_RAW_SNIPPET_CHARS` characters. Control characters other than
/// newline, carriage return and tab are stripped before truncation, so the
/// snippet may cover more than `MAX_RAW_SNIPPET_CHARS` characters of the
/// original body.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{kind}: {message}")]
pub struct ErrorDescriptor {
    /// Which stage of the lookup failed
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
    /// First characters of the raw upstream body, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_snippet: Option<String>,
}

impl ErrorDescriptor {
    fn new(kind: ErrorKind, message: impl Into<String>, raw_body: Option<&str>) -> Self {
        Self {
            kind,
            message: message.into(),
            raw_snippet: raw_body.map(|body| truncate_snippet(body, MAX_RAW_SNIPPET_CHARS)),
        }
    }

    /// The classifier rejected the input text.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput, INVALID_INPUT_MESSAGE, None)
    }

    /// Connection, DNS, timeout or body-read failure. `detail` is the
    /// underlying transport error text.
    pub fn transport(detail: &str) -> Self {
        Self::new(
            ErrorKind::Transport,
            sanitize_and_truncate_error_message(detail),
            None,
        )
    }

    /// The upstream answered with a status other than 200.
    pub fn http_status(status: u16, body: &str) -> Self {
        Self::new(
            ErrorKind::HttpStatus,
            format!("HTTP Error: {}", status),
            Some(body),
        )
    }

    /// The upstream answered 200 with no content.
    pub fn empty_response() -> Self {
        Self::new(ErrorKind::EmptyResponse, "No response from API", None)
    }

    /// The body could not be parsed as a JSON object.
    pub fn malformed_json(diagnostic: &str, body: &str) -> Self {
        Self::new(
            ErrorKind::MalformedJson,
            format!("Invalid JSON Response: {}", diagnostic),
            Some(body),
        )
    }

    /// The payload carried an explicit failure flag.
    pub fn application_error(message: &str, body: &str) -> Self {
        Self::new(ErrorKind::ApplicationError, message, Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_as_str_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in ErrorKind::iter() {
            assert!(!kind.as_str().is_empty());
            assert!(seen.insert(kind.as_str()), "duplicate label for {:?}", kind);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::HttpStatus).unwrap(),
            "\"http_status\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::ApplicationError).unwrap(),
            "\"application_error\""
        );
    }

    #[test]
    fn test_http_status_snippet_is_bounded() {
        let body = "x".repeat(5_000);
        let err = ErrorDescriptor::http_status(500, &body);
        assert_eq!(err.kind, ErrorKind::HttpStatus);
        assert!(err.message.contains("500"));
        let snippet = err.raw_snippet.expect("status errors carry a snippet");
        assert_eq!(snippet.chars().count(), MAX_RAW_SNIPPET_CHARS);
    }

    #[test]
    fn test_invalid_input_and_empty_carry_no_snippet() {
        assert!(ErrorDescriptor::invalid_input().raw_snippet.is_none());
        assert!(ErrorDescriptor::empty_response().raw_snippet.is_none());
        assert!(ErrorDescriptor::transport("connection refused")
            .raw_snippet
            .is_none());
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = ErrorDescriptor::application_error("invalid query", "{}");
        assert_eq!(err.to_string(), "API error: invalid query");
    }

    #[test]
    fn test_snippet_omitted_from_json_when_absent() {
        let json = serde_json::to_value(ErrorDescriptor::empty_response()).unwrap();
        assert_eq!(json["kind"], "empty_response");
        assert!(json.get("raw_snippet").is_none());
    }
}
