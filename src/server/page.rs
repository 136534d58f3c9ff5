//! Server-rendered lookup page.
//!
//! One page serves both the empty form and the result view. All text that
//! originates from the user or the upstream is escaped before it is
//! interpolated.

use crate::config::UPSTREAM_RATE_LIMIT_PER_MINUTE;
use crate::coordinate::Coordinate;
use crate::error_handling::ErrorKind;
use crate::lookup::LookupOutcome;
use crate::utils::escape_html;

const PAGE_STYLE: &str = r#"
        pre { color: #ffffff; border: 1px solid #555; padding: 10px; white-space: pre-wrap; }
        #map { height: 580px; border: 1px solid #555; padding: 10px; }
"#;

/// Renders the full page.
///
/// `submitted` is echoed back into the input box; `outcome` is `None` for
/// the initial, empty form.
pub fn render_page(submitted: Option<&str>, outcome: Option<&LookupOutcome>) -> String {
    let input_value = escape_html(submitted.unwrap_or(""));
    let sections = outcome.map(render_outcome).unwrap_or_default();
    let map_script = outcome
        .and_then(LookupOutcome::coordinate)
        .map(render_map_script)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WHOIS Lookup</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
        integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=" crossorigin="">
    <style>{style}</style>
</head>
<body class="bg-dark">
    <div class="container mt-5">
        <h1 class="text-center mb-4 text-light">WHOIS Lookup</h1>
        <p class="text-center text-light">Search by domain, IPv4/IPv6 address, or email address. Limited to {rate_limit} HTTP requests per minute from an IP address with <a href="https://ip-api.com/" target="_blank">ip-api.com</a></p>
        <div class="card mb-4 bg-dark border-secondary">
            <div class="card-body">
                <form method="post" action="/">
                    <div class="input-group">
                        <input type="text" name="query" value="{input_value}" class="form-control border-secondary" placeholder="e.g., example.com, 8.8.8.8, user@example.com or leave empty for My IP.">
                        <button type="submit" class="btn btn-primary">Lookup</button>
                    </div>
                </form>
            </div>
        </div>
{sections}    </div>
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
        integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=" crossorigin=""></script>
{map_script}</body>
</html>
"#,
        style = PAGE_STYLE,
        rate_limit = UPSTREAM_RATE_LIMIT_PER_MINUTE,
        input_value = input_value,
        sections = sections,
        map_script = map_script,
    )
}

fn render_outcome(outcome: &LookupOutcome) -> String {
    let mut html = String::new();

    if let Some(error) = outcome.error() {
        // Classifier rejections show the message only.
        if error.kind == ErrorKind::InvalidInput {
            html.push_str(&format!(
                r#"        <div class="alert alert-danger" role="alert">{message}</div>
"#,
                message = escape_html(&error.message),
            ));
            return html;
        }

        html.push_str(&format!(
            r#"        <div class="alert alert-danger" role="alert">{kind}: {message}</div>
        <div class="card mb-4 bg-dark border-secondary">
            <div class="card-header text-light"><h5>Debug Info</h5></div>
            <div class="card-body bg-dark border-secondary"><pre>{debug}</pre></div>
        </div>
"#,
            kind = escape_html(error.kind.as_str()),
            message = escape_html(&error.message),
            debug = escape_html(&serde_json::to_string_pretty(error).unwrap_or_default()),
        ));
    }

    if let Some(payload) = outcome.result() {
        let location = if outcome.coordinate().is_some() {
            r#"            <div class="col-6">
                <div class="card bg-dark border-secondary">
                    <div class="card-header border-secondary text-light"><h5>Location Map</h5></div>
                    <div class="card-body"><div id="map"></div></div>
                </div>
            </div>
"#
        } else {
            r#"            <div class="col-6">
                <div class="alert alert-info" role="alert">No location data available for this query.</div>
            </div>
"#
        };

        html.push_str(&format!(
            r#"        <div class="row justify-content-between">
            <div class="col-6">
                <div class="card bg-dark border-secondary">
                    <div class="card-header border-secondary text-light"><h5>WHOIS Results</h5></div>
                    <div class="card-body bg-dark border-secondary"><pre>{json}</pre></div>
                </div>
            </div>
{location}        </div>
"#,
            json = escape_html(&payload.to_pretty_json()),
            location = location,
        ));
    }

    html
}

/// Leaflet initialization for a marker at `coordinate`.
///
/// Only numbers are interpolated, so no escaping is needed.
fn render_map_script(coordinate: Coordinate) -> String {
    let Coordinate {
        latitude,
        longitude,
    } = coordinate;
    format!(
        r#"    <script>
        var map = L.map('map').setView([{latitude}, {longitude}], 10);
        L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
        }}).addTo(map);
        L.marker([{latitude}, {longitude}]).addTo(map)
            .bindPopup('Latitude: {latitude}<br>Longitude: {longitude}')
            .openPopup();
    </script>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{InputKind, LookupQuery};
    use crate::error_handling::ErrorDescriptor;
    use crate::lookup::LookupPayload;
    use serde_json::json;

    fn success(value: serde_json::Value) -> LookupOutcome {
        let payload = match value {
            serde_json::Value::Object(map) => LookupPayload::new(map),
            _ => panic!("test payload must be an object"),
        };
        let coordinate = payload.coordinate();
        LookupOutcome {
            input_kind: InputKind::Domain,
            query: LookupQuery::from_input("example.com", InputKind::Domain),
            result: Ok(payload),
            coordinate,
        }
    }

    fn failure(error: ErrorDescriptor) -> LookupOutcome {
        LookupOutcome {
            input_kind: InputKind::Domain,
            query: LookupQuery::from_input("example.com", InputKind::Domain),
            result: Err(error),
            coordinate: None,
        }
    }

    #[test]
    fn test_empty_form() {
        let html = render_page(None, None);
        assert!(html.contains(r#"<form method="post" action="/">"#));
        assert!(html.contains("45 HTTP requests per minute"));
        assert!(!html.contains("alert-danger"));
        assert!(!html.contains("L.map("));
        assert!(!html.contains("No location data"));
    }

    #[test]
    fn test_result_with_map() {
        let outcome = success(json!({
            "status": "success",
            "country": "France",
            "lat": 48.85,
            "lon": 2.35
        }));
        let html = render_page(Some("example.com"), Some(&outcome));
        assert!(html.contains("WHOIS Results"));
        assert!(html.contains("&quot;country&quot;: &quot;France&quot;"));
        assert!(html.contains("setView([48.85, 2.35], 10)"));
        assert!(html.contains(r#"value="example.com""#));
        assert!(!html.contains("No location data"));
    }

    #[test]
    fn test_result_without_coordinates_shows_notice() {
        let outcome = success(json!({"status": "success", "country": "France"}));
        let html = render_page(Some("example.com"), Some(&outcome));
        assert!(html.contains("No location data available for this query."));
        assert!(!html.contains("L.map("));
    }

    #[test]
    fn test_error_banner_and_debug_card() {
        let outcome = failure(ErrorDescriptor::http_status(500, "<b>boom</b>"));
        let html = render_page(Some("example.com"), Some(&outcome));
        assert!(html.contains("HTTP status error: HTTP Error: 500"));
        assert!(html.contains("Debug Info"));
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
        assert!(!html.contains("<b>boom</b>"));
        assert!(!html.contains("WHOIS Results"));
        assert!(!html.contains("No location data"));
    }

    #[test]
    fn test_submitted_input_is_escaped() {
        let outcome = LookupOutcome {
            input_kind: InputKind::Invalid,
            query: None,
            result: Err(ErrorDescriptor::invalid_input()),
            coordinate: None,
        };
        let html = render_page(Some(r#""><script>alert(1)</script>"#), Some(&outcome));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("Invalid input. Please enter a valid domain"));
    }

    #[test]
    fn test_invalid_input_banner_has_no_kind_prefix_or_debug_card() {
        let outcome = LookupOutcome {
            input_kind: InputKind::Invalid,
            query: None,
            result: Err(ErrorDescriptor::invalid_input()),
            coordinate: None,
        };
        let html = render_page(Some("not a domain!!"), Some(&outcome));
        assert!(html.contains(
            r#"role="alert">Invalid input. Please enter a valid domain"#
        ));
        assert!(!html.contains("Invalid input: Invalid input"));
        assert!(!html.contains("Debug Info"));
    }
}
