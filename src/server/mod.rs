//! HTTP server for the lookup form.
//!
//! Provides three endpoints:
//! - `GET /` - the empty lookup form
//! - `POST /` - runs a lookup for the submitted form and renders the result
//! - `GET /api/lookup?query=...` - the same lookup as JSON
//!
//! Each request is independent; the only shared value is the upstream client.

mod handlers;
mod page;
mod types;

use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use handlers::{api_lookup_handler, index_handler, lookup_form_handler};
pub use page::render_page;
pub use types::{ApiLookupParams, ApiLookupResponse, AppState, LookupForm};

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(lookup_form_handler))
        .route("/api/lookup", get(api_lookup_handler))
        .with_state(state)
}

/// Serves the application on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")
}

/// Binds `addr` and serves the lookup form.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind web server to {}", addr))?;

    let local = listener.local_addr().unwrap_or(addr);
    log::info!("Lookup form listening on http://{}/", local);
    log::info!("  - JSON API: http://{}/api/lookup?query=...", local);
    log::info!("  - Upstream: {}", state.client.base_url());

    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, stopping web server");
}
