//! Upstream geolocation lookup.
//!
//! Wraps the single outbound HTTP call and normalizes everything that can go
//! wrong into an `ErrorDescriptor`. Failures are checked in a fixed order
//! and the first one that applies wins:
//!
//! 1. transport failure (connect, DNS, timeout)
//! 2. status other than 200
//! 3. empty body
//! 4. body is not a JSON object
//! 5. payload carries an application-level failure flag
//!
//! Nothing is retried or cached; each call is independent.

mod endpoint;
mod types;

use std::time::Instant;

use log::{debug, info, warn};
use reqwest::StatusCode;
use serde_json::Value;

use crate::classify::{classify, LookupQuery};
use crate::config::UNKNOWN_API_ERROR_MESSAGE;
use crate::error_handling::{
    categorize_reqwest_error, error_chain_message, ErrorDescriptor, InitializationError,
};
use crate::utils::sanitize::sanitize_error_message;

pub use endpoint::{build_lookup_url, parse_base_url};
pub use types::{LookupOutcome, LookupPayload, LookupResult};

/// Client for the upstream lookup API.
///
/// Holds an injected `reqwest::Client` (a connection pool with no cookie
/// store, so nothing leaks between callers) and the validated endpoint.
/// Cheap to clone; share it through an `Arc` or by reference.
#[derive(Debug, Clone)]
pub struct GeoLookupClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl GeoLookupClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidBaseUrlError` if `base_url` is not
    /// an absolute http(s) URL that can take a path segment.
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, InitializationError> {
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// The configured upstream endpoint.
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Performs one lookup: a single GET, no retries.
    pub async fn lookup(&self, query: &LookupQuery) -> LookupResult {
        let url = build_lookup_url(&self.base_url, query);
        debug!("GET {}", url);
        let start = Instant::now();

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => return Err(transport_failure(&e)),
        };

        let status = response.status();
        let body = if status == StatusCode::OK {
            match response.text().await {
                Ok(body) => body,
                Err(e) => return Err(transport_failure(&e)),
            }
        } else {
            // The status already decides the outcome; the body is diagnostics only
            response.text().await.unwrap_or_default()
        };

        debug!(
            "Upstream answered {} ({} bytes) in {:?}",
            status.as_u16(),
            body.len(),
            start.elapsed()
        );

        normalize_response(status.as_u16(), &body)
    }
}

fn transport_failure(error: &reqwest::Error) -> ErrorDescriptor {
    debug!(
        "Upstream transport failure ({}): {}",
        categorize_reqwest_error(error).as_str(),
        error
    );
    ErrorDescriptor::transport(&error_chain_message(error))
}

/// Maps a received status and body onto a `LookupResult`.
///
/// This is steps 2-5 of the failure cascade; transport failures are handled
/// by the caller before a status exists.
pub fn normalize_response(status: u16, body: &str) -> LookupResult {
    if status != StatusCode::OK.as_u16() {
        return Err(ErrorDescriptor::http_status(status, body));
    }

    if body.trim().is_empty() {
        return Err(ErrorDescriptor::empty_response());
    }

    let fields = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            return Err(ErrorDescriptor::malformed_json(
                &format!("expected a JSON object, found {}", json_type_name(&other)),
                body,
            ))
        }
        Err(e) => return Err(ErrorDescriptor::malformed_json(&e.to_string(), body)),
    };

    if let Some(message) = application_failure_message(&fields) {
        return Err(ErrorDescriptor::application_error(message, body));
    }

    Ok(LookupPayload::new(fields))
}

/// Returns the failure message when the payload flags itself as failed.
///
/// Two flags are recognized: a boolean `"success": false`, and ip-api.com's
/// `"status": "fail"`.
fn application_failure_message(fields: &serde_json::Map<String, Value>) -> Option<&str> {
    let failed = matches!(fields.get("success"), Some(Value::Bool(false)))
        || matches!(fields.get("status"), Some(Value::String(s)) if s.eq_ignore_ascii_case("fail"));

    failed.then(|| {
        fields
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(UNKNOWN_API_ERROR_MESSAGE)
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Runs the whole per-request pipeline for one piece of user input.
///
/// Classifies the input, rejects `Invalid` before any network call,
/// rewrites email input to its domain, performs the lookup and extracts the
/// optional map coordinate from a successful payload.
pub async fn run_lookup(client: &GeoLookupClient, input: &str) -> LookupOutcome {
    let input_kind = classify(input);

    let Some(query) = LookupQuery::from_input(input, input_kind) else {
        info!(
            "Rejected invalid input '{}' without calling upstream",
            sanitize_error_message(input.trim())
        );
        return LookupOutcome {
            input_kind,
            query: None,
            result: Err(ErrorDescriptor::invalid_input()),
            coordinate: None,
        };
    };

    info!("Looking up {} ({})", query, input_kind);
    let result = client.lookup(&query).await;

    let coordinate = match &result {
        Ok(payload) => {
            let coordinate = payload.coordinate();
            if coordinate.is_none() {
                debug!("No usable coordinates in payload for {}", query);
            }
            coordinate
        }
        Err(e) => {
            warn!("Lookup for {} failed: {}", query, e);
            None
        }
    };

    LookupOutcome {
        input_kind,
        query: Some(query),
        result,
        coordinate,
    }
}
