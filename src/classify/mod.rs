//! Input classification.
//!
//! Maps the free text typed into the lookup form onto a closed set of input
//! kinds, and derives the query string actually sent upstream.
//!
//! Key functions:
//! - `classify()` - Decides what kind of identifier the user entered
//! - `LookupQuery::from_input()` - Rewrites the input into the upstream query

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Maximum length of the local part of an email address (RFC 5321).
const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;
/// Maximum length of a whole email address.
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is a valid regex")
});

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("domain pattern is a valid regex")
});

/// The kind of identifier a piece of user input represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Empty input: look up the caller's own address
    MyIp,
    /// An IPv4 literal
    Ipv4,
    /// An IPv6 literal
    Ipv6,
    /// An email address; only its domain part is looked up
    Email,
    /// A domain-shaped host name
    Domain,
    /// Anything else; never sent upstream
    Invalid,
}

impl InputKind {
    /// Returns a short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::MyIp => "myIP",
            InputKind::Ipv4 => "ipv4",
            InputKind::Ipv6 => "ipv6",
            InputKind::Email => "email",
            InputKind::Domain => "domain",
            InputKind::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies user input into exactly one `InputKind`.
///
/// Leading and trailing whitespace is ignored. The checks run in a fixed
/// order: IP literals come before email and domain so numeric-looking text
/// is never taken for a host name.
///
/// # Examples
///
/// ```
/// use whois_lookup::{classify, InputKind};
///
/// assert_eq!(classify("  "), InputKind::MyIp);
/// assert_eq!(classify("8.8.8.8"), InputKind::Ipv4);
/// assert_eq!(classify("user@example.com"), InputKind::Email);
/// assert_eq!(classify("not a domain!!"), InputKind::Invalid);
/// ```
pub fn classify(input: &str) -> InputKind {
    let input = input.trim();
    if input.is_empty() {
        return InputKind::MyIp;
    }

    if input.parse::<Ipv4Addr>().is_ok() {
        InputKind::Ipv4
    } else if input.parse::<Ipv6Addr>().is_ok() {
        InputKind::Ipv6
    } else if is_email(input) {
        InputKind::Email
    } else if DOMAIN_PATTERN.is_match(input) {
        InputKind::Domain
    } else {
        InputKind::Invalid
    }
}

fn is_email(input: &str) -> bool {
    if input.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match input.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_EMAIL_LOCAL_PART_LENGTH => {
            EMAIL_PATTERN.is_match(input)
        }
        _ => false,
    }
}

/// The exact string sent to the upstream API.
///
/// An empty query asks the upstream to resolve the caller's own address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookupQuery(String);

impl LookupQuery {
    /// Derives the upstream query from raw input and its classification.
    ///
    /// Returns `None` for `InputKind::Invalid`, which must never reach the
    /// network. Email input is reduced to the part after the last `@`.
    pub fn from_input(input: &str, kind: InputKind) -> Option<Self> {
        let input = input.trim();
        let query = match kind {
            InputKind::Invalid => return None,
            InputKind::MyIp => String::new(),
            InputKind::Email => input
                .rsplit_once('@')
                .map(|(_, domain)| domain)
                .unwrap_or(input)
                .to_string(),
            InputKind::Ipv4 | InputKind::Ipv6 | InputKind::Domain => input.to_string(),
        };
        Some(Self(query))
    }

    /// Returns the query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the query asks for the caller's own address.
    pub fn is_own_address(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_own_address() {
            f.write_str("<own address>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
