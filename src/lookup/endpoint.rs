//! Upstream endpoint validation and request URL construction.

use url::Url;

use crate::classify::LookupQuery;
use crate::config::API_FIELDS;
use crate::error_handling::InitializationError;

/// Parses and checks the configured upstream endpoint.
///
/// The endpoint must be an absolute http(s) URL that can take extra path
/// segments; anything else is rejected at startup instead of on every lookup.
pub fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let invalid = |reason: String| InitializationError::InvalidBaseUrlError {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot take path segments".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("URL must not carry a query or fragment".to_string()));
    }
    Ok(url)
}

/// Builds `{base}/{query}?fields=...` for one lookup.
///
/// The query becomes a single percent-encoded path segment; an empty query
/// yields a trailing slash, which the upstream reads as "the caller's own
/// address".
pub fn build_lookup_url(base: &Url, query: &LookupQuery) -> Url {
    let mut url = base.clone();
    // parse_base_url already rejected cannot-be-a-base URLs
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(query.as_str());
    }
    url.query_pairs_mut()
        .clear()
        .append_pair("fields", API_FIELDS);
    url
}
