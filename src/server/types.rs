//! Web server data structures.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::classify::{InputKind, LookupQuery};
use crate::coordinate::Coordinate;
use crate::error_handling::ErrorDescriptor;
use crate::lookup::{GeoLookupClient, LookupOutcome, LookupPayload};

/// Shared state for the web server
#[derive(Clone)]
pub struct AppState {
    /// Upstream client shared by every request; holds no per-caller state
    pub client: Arc<GeoLookupClient>,
}

impl AppState {
    /// Wraps a lookup client for use as router state.
    pub fn new(client: GeoLookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Body of the form submitted to `POST /`
#[derive(Debug, Deserialize)]
pub struct LookupForm {
    /// Free-text input; missing or empty means "my own address"
    #[serde(default)]
    pub query: String,
}

/// Query string of `GET /api/lookup`
#[derive(Debug, Deserialize)]
pub struct ApiLookupParams {
    /// Free-text input; missing or empty means "my own address"
    #[serde(default)]
    pub query: String,
}

/// JSON response for `/api/lookup`
#[derive(Debug, Serialize)]
pub struct ApiLookupResponse<'a> {
    /// How the input was classified
    pub input_kind: InputKind,
    /// Query sent upstream; null when the input was rejected
    pub query: Option<&'a LookupQuery>,
    /// Upstream payload on success
    pub result: Option<&'a LookupPayload>,
    /// Error descriptor on failure
    pub error: Option<&'a ErrorDescriptor>,
    /// Map coordinate, when the payload had one
    pub coordinate: Option<Coordinate>,
}

impl<'a> From<&'a LookupOutcome> for ApiLookupResponse<'a> {
    fn from(outcome: &'a LookupOutcome) -> Self {
        Self {
            input_kind: outcome.input_kind(),
            query: outcome.query(),
            result: outcome.result(),
            error: outcome.error(),
            coordinate: outcome.coordinate(),
        }
    }
}
