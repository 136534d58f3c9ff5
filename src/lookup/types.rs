//! Lookup data structures.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::classify::{InputKind, LookupQuery};
use crate::coordinate::{extract_coordinate, Coordinate};
use crate::error_handling::ErrorDescriptor;

/// A successful upstream answer: the flat mapping of named fields
/// (country, region, city, ISP, ...), in the order the upstream sent them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LookupPayload(Map<String, Value>);

impl LookupPayload {
    /// Wraps a parsed JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value of a named field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns all fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Extracts a usable coordinate, if the payload has one.
    pub fn coordinate(&self) -> Option<Coordinate> {
        extract_coordinate(&self.0)
    }

    /// Pretty-printed JSON for display.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".into())
    }

    /// Unwraps the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Outcome of one upstream call: payload XOR error descriptor.
pub type LookupResult = Result<LookupPayload, ErrorDescriptor>;

/// Everything the presentation layer needs about one request.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub(crate) input_kind: InputKind,
    pub(crate) query: Option<LookupQuery>,
    pub(crate) result: LookupResult,
    pub(crate) coordinate: Option<Coordinate>,
}

impl LookupOutcome {
    /// How the raw input was classified.
    pub fn input_kind(&self) -> InputKind {
        self.input_kind
    }

    /// The query sent upstream; `None` when the input was rejected.
    pub fn query(&self) -> Option<&LookupQuery> {
        self.query.as_ref()
    }

    /// The payload, when the lookup succeeded.
    pub fn result(&self) -> Option<&LookupPayload> {
        self.result.as_ref().ok()
    }

    /// The error descriptor, when the request failed at any stage.
    pub fn error(&self) -> Option<&ErrorDescriptor> {
        self.result.as_ref().err()
    }

    /// The map coordinate; only ever present alongside a payload.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Consumes the outcome, keeping only the tagged result.
    pub fn into_result(self) -> LookupResult {
        self.result
    }
}
