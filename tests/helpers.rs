// Shared test helpers for spinning up the web server against a simulated upstream.

use std::time::Duration;

use tokio::net::TcpListener;

use whois_lookup::server::{serve, AppState};
use whois_lookup::GeoLookupClient;

/// A successful upstream body for Paris.
#[allow(dead_code)] // Used by other test files
pub const PARIS_BODY: &str = r#"{"status":"success","continent":"Europe","country":"France","countryCode":"FR","regionName":"Ile-de-France","city":"Paris","lat":48.85,"lon":2.35,"isp":"Example ISP","query":"93.184.216.34"}"#;

/// Builds a lookup client pointed at `base_url` with a short timeout.
pub fn test_client(base_url: &str) -> GeoLookupClient {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test HTTP client");
    GeoLookupClient::new(http, base_url).expect("Failed to create lookup client")
}

/// Starts the web server on an ephemeral port and returns its base URL.
/// The server task lives until the test runtime shuts down.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(upstream_base_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let state = AppState::new(test_client(upstream_base_url));

    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });

    format!("http://{}", addr)
}
