//! JSON lookup handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{ApiLookupParams, ApiLookupResponse, AppState};
use crate::error_handling::ErrorKind;
use crate::lookup::run_lookup;

/// JSON variant of the lookup form
///
/// 200 on success, 400 when the input is rejected, 502 for any upstream failure.
pub async fn api_lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<ApiLookupParams>,
) -> Response {
    let outcome = run_lookup(&state.client, &params.query).await;

    let status = match outcome.error() {
        None => StatusCode::OK,
        Some(e) if e.kind == ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        Some(_) => StatusCode::BAD_GATEWAY,
    };

    (status, Json(ApiLookupResponse::from(&outcome))).into_response()
}
