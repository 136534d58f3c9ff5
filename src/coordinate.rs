//! Coordinate extraction from lookup payloads.
//!
//! Providers disagree on what to call latitude and longitude, so each half is
//! looked up under a fixed, ordered list of key names. A coordinate is only
//! usable when both halves resolve to a numeric value.

use serde::Serialize;
use serde_json::{Map, Value};

/// Accepted latitude keys, in priority order.
pub const LATITUDE_KEYS: &[&str] = &["latitude", "lat"];
/// Accepted longitude keys, in priority order.
pub const LONGITUDE_KEYS: &[&str] = &["longitude", "lon"];

/// A jointly-present latitude/longitude pair used for map rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

/// Extracts a usable coordinate from a payload.
///
/// Each half is resolved independently: the first key in its alias list
/// holding a numeric value wins, so `latitude` may pair with `lon`.
/// Absence is not an error; it only suppresses the map.
pub fn extract_coordinate(fields: &Map<String, Value>) -> Option<Coordinate> {
    let latitude = first_numeric(fields, LATITUDE_KEYS)?;
    let longitude = first_numeric(fields, LONGITUDE_KEYS)?;
    Some(Coordinate {
        latitude,
        longitude,
    })
}

fn first_numeric(fields: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| fields.get(*key).and_then(numeric_value))
}

/// Reads a JSON number, or a string holding one, as a finite `f64`.
fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn test_lat_lon_pair() {
        let payload = fields(json!({
            "status": "success",
            "country": "France",
            "lat": 48.85,
            "lon": 2.35
        }));
        assert_eq!(
            extract_coordinate(&payload),
            Some(Coordinate {
                latitude: 48.85,
                longitude: 2.35
            })
        );
    }

    #[test]
    fn test_long_names_take_priority() {
        let payload = fields(json!({
            "lat": 1.0,
            "lon": 2.0,
            "latitude": 10.0,
            "longitude": 20.0
        }));
        assert_eq!(
            extract_coordinate(&payload),
            Some(Coordinate {
                latitude: 10.0,
                longitude: 20.0
            })
        );
    }

    #[test]
    fn test_falls_through_to_next_key_when_first_is_unusable() {
        let payload = fields(json!({
            "latitude": "n/a",
            "longitude": 20.0,
            "lat": -33.9,
            "lon": 151.2
        }));
        assert_eq!(
            extract_coordinate(&payload),
            Some(Coordinate {
                latitude: -33.9,
                longitude: 20.0
            })
        );
    }

    #[test]
    fn test_missing_keys_yield_none() {
        let payload = fields(json!({"status": "success", "country": "France"}));
        assert_eq!(extract_coordinate(&payload), None);
    }

    #[test]
    fn test_only_one_half_yields_none() {
        assert_eq!(extract_coordinate(&fields(json!({"lat": 48.85}))), None);
        assert_eq!(extract_coordinate(&fields(json!({"longitude": 2.35}))), None);
    }

    #[test]
    fn test_mixed_key_names_yield_coordinate() {
        let paris = Some(Coordinate {
            latitude: 48.85,
            longitude: 2.35,
        });
        assert_eq!(
            extract_coordinate(&fields(json!({"latitude": 48.85, "lon": 2.35}))),
            paris
        );
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": 48.85, "longitude": 2.35}))),
            paris
        );
    }

    #[test]
    fn test_non_numeric_values_yield_none() {
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": null, "lon": 2.35}))),
            None
        );
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": true, "lon": 2.35}))),
            None
        );
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": "north", "lon": "east"}))),
            None
        );
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let payload = fields(json!({"latitude": "48.85", "longitude": " 2.35 "}));
        assert_eq!(
            extract_coordinate(&payload),
            Some(Coordinate {
                latitude: 48.85,
                longitude: 2.35
            })
        );
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": "NaN", "lon": "inf"}))),
            None
        );
    }

    #[test]
    fn test_integer_coordinates() {
        assert_eq!(
            extract_coordinate(&fields(json!({"lat": 0, "lon": 0}))),
            Some(Coordinate {
                latitude: 0.0,
                longitude: 0.0
            })
        );
    }
}
