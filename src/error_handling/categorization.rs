//! Transport error categorization.
//!
//! `reqwest` collapses many distinct failures into one error type. These
//! helpers recover a coarse category for logging and flatten the error's
//! source chain into the message shown to users.

use std::error::Error as StdError;

/// Coarse category of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TransportErrorType {
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Builder,
    Redirect,
    Other,
}

impl TransportErrorType {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorType::Timeout => "timeout",
            TransportErrorType::Connect => "connect",
            TransportErrorType::Request => "request",
            TransportErrorType::Body => "body",
            TransportErrorType::Decode => "decode",
            TransportErrorType::Builder => "builder",
            TransportErrorType::Redirect => "redirect",
            TransportErrorType::Other => "other",
        }
    }
}

/// Categorizes a `reqwest::Error` into a `TransportErrorType`.
///
/// Timeouts are checked first because a timed-out connect attempt reports
/// both `is_timeout()` and `is_connect()`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorType {
    if error.is_timeout() {
        TransportErrorType::Timeout
    } else if error.is_connect() {
        TransportErrorType::Connect
    } else if error.is_builder() {
        TransportErrorType::Builder
    } else if error.is_redirect() {
        TransportErrorType::Redirect
    } else if error.is_body() {
        TransportErrorType::Body
    } else if error.is_decode() {
        TransportErrorType::Decode
    } else if error.is_request() {
        TransportErrorType::Request
    } else {
        TransportErrorType::Other
    }
}

/// Renders an error and all of its sources as `outer: inner: root`.
///
/// `reqwest`'s own `Display` only says "error sending request"; the cause
/// (connection refused, DNS failure) lives further down the chain.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
