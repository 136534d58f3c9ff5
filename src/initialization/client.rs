//! HTTP client initialization.
//!
//! This module builds the single `reqwest::Client` used for upstream lookups
//! and wraps it in a `GeoLookupClient`.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::lookup::GeoLookupClient;

/// Initializes the HTTP client with the configured timeout and user agent.
///
/// The client keeps a connection pool but no cookie store, so concurrent
/// callers never observe each other's session state. The timeout bounds
/// the whole request, including reading the body.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

/// Initializes the upstream lookup client from configuration.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be
/// built, or `InitializationError::InvalidBaseUrlError` if the configured
/// endpoint is unusable.
pub fn init_lookup_client(config: &Config) -> Result<GeoLookupClient, InitializationError> {
    let http = init_client(config)?;
    GeoLookupClient::new(http, &config.api_base_url)
}
