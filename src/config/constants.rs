//! Configuration constants.
//!
//! This module defines the defaults and fixed parameters used throughout the
//! application: upstream endpoint, field selection, timeouts and size limits.

/// Default address the web form listens on.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default upstream endpoint. The query is appended as the last path segment.
///
/// The free ip-api.com tier is plain HTTP only.
pub const DEFAULT_API_BASE_URL: &str = "http://ip-api.com/json";

/// Per-request timeout in seconds for the upstream call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for upstream requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("whois_lookup/", env!("CARGO_PKG_VERSION"));

/// Fixed field selection sent with every lookup.
///
/// Listing the fields explicitly keeps the response schema deterministic
/// instead of depending on the provider's default field set.
pub const API_FIELDS: &str = "status,message,continent,continentCode,country,countryCode,region,regionName,city,district,zip,lat,lon,timezone,offset,currency,isp,org,as,asname,reverse,mobile,proxy,hosting,query";

/// Documented upstream rate limit (requests per minute per caller IP).
///
/// Not enforced locally; shown on the form so users know why lookups may fail.
pub const UPSTREAM_RATE_LIMIT_PER_MINUTE: u32 = 45;

// Diagnostic size limits
/// Maximum raw response snippet length in characters (500 chars)
/// Bounds memory and log size for bodies carried in error descriptors
pub const MAX_RAW_SNIPPET_CHARS: usize = 500;
/// Maximum error message length in characters (2000 chars)
/// Transport error chains longer than this are truncated with a note about the original length
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Fallback message when the upstream reports a failure without a `message` field.
pub const UNKNOWN_API_ERROR_MESSAGE: &str = "Unknown error";

/// Message shown when the classifier rejects the input.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please enter a valid domain, IPv4/IPv6 address, or email.";
