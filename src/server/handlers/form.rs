//! Server-rendered lookup form handlers.

use axum::extract::{Form, State};
use axum::response::Html;

use super::super::page::render_page;
use super::super::types::{AppState, LookupForm};
use crate::lookup::run_lookup;

/// Empty lookup form
pub async fn index_handler() -> Html<String> {
    Html(render_page(None, None))
}

/// Runs a lookup for the submitted text and renders the result page
pub async fn lookup_form_handler(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Html<String> {
    let outcome = run_lookup(&state.client, &form.query).await;
    Html(render_page(Some(&form.query), Some(&outcome)))
}
