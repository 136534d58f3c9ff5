//! whois_lookup library: identifier classification and geolocation lookup
//!
//! This library backs a small web form. A user types a domain name, an
//! IPv4/IPv6 address or an email address (or nothing, meaning "my own
//! address"); the input is classified, rewritten into an upstream query,
//! sent to an ip-api.com compatible endpoint, and the answer is normalized
//! into either a payload or a structured error, plus an optional map
//! coordinate.
//!
//! # Example
//!
//! ```no_run
//! use whois_lookup::initialization::init_lookup_client;
//! use whois_lookup::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_lookup_client(&Config::default())?;
//!
//! let outcome = run_lookup(&client, "user@example.com").await;
//! match (outcome.result(), outcome.error()) {
//!     (Some(payload), _) => println!("{}", payload.to_pretty_json()),
//!     (_, Some(error)) => eprintln!("{}", error),
//!     _ => unreachable!("an outcome is either a payload or an error"),
//! }
//! if let Some(c) = outcome.coordinate() {
//!     println!("marker at {}, {}", c.latitude, c.longitude);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

#![warn(missing_docs)]

mod classify;
pub mod config;
mod coordinate;
mod error_handling;
pub mod initialization;
mod lookup;
pub mod server;
mod utils;

// Re-export public API
pub use classify::{classify, InputKind, LookupQuery};
pub use config::{Config, LogFormat, LogLevel};
pub use coordinate::{extract_coordinate, Coordinate, LATITUDE_KEYS, LONGITUDE_KEYS};
pub use error_handling::{ErrorDescriptor, ErrorKind, InitializationError};
pub use lookup::{
    normalize_response, run_lookup, GeoLookupClient, LookupOutcome, LookupPayload, LookupResult,
};
