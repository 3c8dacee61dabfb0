// SPDX-License-Identifier: MIT

//! Pure normalization helpers for raw upstream features.
//!
//! Everything in this module is total: absent or malformed input maps to a
//! safe default, so the record pipeline in `services::trails` can never fail
//! per-feature once a response is structurally valid.

use crate::models::Difficulty;
use geo::Coord;
use serde_json::{Map, Value};

/// Half the Web Mercator extent in projected meters (EPSG:3857).
const WEB_MERCATOR_EXTENT_M: f64 = 20_037_508.34;

/// Reproject one Web Mercator (x, y) pair into WGS84 (longitude, latitude).
///
/// Malformed input propagates as NaN; callers validate with [`valid_wgs84`]
/// before accepting geometry.
pub fn web_mercator_to_wgs84(x: f64, y: f64) -> Coord<f64> {
    let lng = (x / WEB_MERCATOR_EXTENT_M) * 180.0;
    let lat = ((y / WEB_MERCATOR_EXTENT_M * std::f64::consts::PI).exp().atan() * 360.0
        / std::f64::consts::PI)
        - 90.0;
    Coord { x: lng, y: lat }
}

/// Reproject a projected polyline path, preserving cardinality and order.
///
/// Points with fewer than two ordinates become NaN coordinates and are
/// dropped by downstream validation.
pub fn reproject_path(path: &[Vec<f64>]) -> Vec<Coord<f64>> {
    path.iter()
        .map(|point| match point.as_slice() {
            [x, y, ..] => web_mercator_to_wgs84(*x, *y),
            _ => Coord {
                x: f64::NAN,
                y: f64::NAN,
            },
        })
        .collect()
}

/// Whether a coordinate is a usable WGS84 pair.
pub fn valid_wgs84(coord: &Coord<f64>) -> bool {
    coord.x.is_finite()
        && coord.y.is_finite()
        && (-180.0..=180.0).contains(&coord.x)
        && (-90.0..=90.0).contains(&coord.y)
}

/// Derive a difficulty rating from the slope-profile and obstacle codes.
///
/// Either code absent means the rating cannot be derived and defaults to
/// moderate; the difficulty-raising check runs before the moderate fallback
/// so ambiguous combinations resolve upward.
pub fn difficulty_from(profile: Option<i64>, obstacles: Option<i64>) -> Difficulty {
    let (Some(profile), Some(obstacles)) = (profile, obstacles) else {
        return Difficulty::Moderate;
    };

    if profile == 1 && obstacles == 1 {
        Difficulty::Easy
    } else if profile == 3 || obstacles == 3 {
        Difficulty::Difficult
    } else {
        Difficulty::Moderate
    }
}

/// Compose the season label from the summer/winter usage flags.
pub fn season_label(summer: bool, winter: bool) -> String {
    let mut seasons = Vec::new();
    if summer {
        seasons.push("Summer");
    }
    if winter {
        seasons.push("Winter");
    }
    if seasons.is_empty() {
        "Year-round".to_string()
    } else {
        seasons.join(", ")
    }
}

/// Convert an upstream length in meters to kilometers, one decimal place.
pub fn length_km(meters: Option<f64>) -> f64 {
    let Some(meters) = meters.filter(|m| m.is_finite()) else {
        return 0.0;
    };
    (((meters / 1000.0) * 10.0).round() / 10.0).max(0.0)
}

/// JS-style truthiness for raw attribute values.
///
/// The upstream dataset is inconsistent about flag encoding (booleans,
/// 0/1 integers, strings), so the flags are interpreted the way the
/// consuming frontend historically did.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// First present, non-empty string among the candidate field names.
///
/// Field names are tried in order: English field first, French field
/// second, then generic aliases.
pub fn first_text(attributes: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|key| attributes.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric attribute lookup (integers and floats both appear upstream).
pub fn number_field(attributes: &Map<String, Value>, key: &str) -> Option<f64> {
    attributes.get(key).and_then(Value::as_f64)
}

/// Integer attribute lookup for coded enumerations.
pub fn code_field(attributes: &Map<String, Value>, key: &str) -> Option<i64> {
    attributes.get(key).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn reprojection_known_point() {
        let coord = web_mercator_to_wgs84(-8_000_000.0, 6_000_000.0);
        assert!((coord.x - (-71.8652)).abs() < 1e-3, "lng was {}", coord.x);
        assert!((coord.y - 47.35).abs() < 0.05, "lat was {}", coord.y);
    }

    #[test]
    fn reprojection_stays_in_wgs84_range() {
        for x in [-20_037_508.34, -8_000_000.0, 0.0, 8_000_000.0, 20_037_508.34] {
            for y in [-20_037_508.34, -6_000_000.0, 0.0, 6_000_000.0, 20_037_508.34] {
                let coord = web_mercator_to_wgs84(x, y);
                assert!((-180.0..=180.0).contains(&coord.x), "lng {}", coord.x);
                assert!((-90.0..=90.0).contains(&coord.y), "lat {}", coord.y);
            }
        }
    }

    #[test]
    fn reprojection_preserves_cardinality_and_order() {
        let path = vec![
            vec![-8_000_000.0, 6_000_000.0],
            vec![-8_000_100.0, 6_000_100.0],
            vec![-8_000_200.0, 6_000_200.0],
        ];
        let coords = reproject_path(&path);
        assert_eq!(coords.len(), 3);
        // Moving west in projected meters moves west in degrees.
        assert!(coords[1].x < coords[0].x);
        assert!(coords[2].x < coords[1].x);
    }

    #[test]
    fn reprojection_short_point_becomes_nan() {
        let coords = reproject_path(&[vec![1.0]]);
        assert_eq!(coords.len(), 1);
        assert!(coords[0].x.is_nan());
        assert!(!valid_wgs84(&coords[0]));
    }

    #[test]
    fn difficulty_determinism() {
        assert_eq!(difficulty_from(Some(1), Some(1)), Difficulty::Easy);
        assert_eq!(difficulty_from(Some(3), Some(1)), Difficulty::Difficult);
        assert_eq!(difficulty_from(Some(3), Some(2)), Difficulty::Difficult);
        assert_eq!(difficulty_from(Some(2), Some(3)), Difficulty::Difficult);
        assert_eq!(difficulty_from(Some(2), Some(2)), Difficulty::Moderate);
        assert_eq!(difficulty_from(None, None), Difficulty::Moderate);
        assert_eq!(difficulty_from(Some(3), None), Difficulty::Moderate);
        assert_eq!(difficulty_from(None, Some(3)), Difficulty::Moderate);
    }

    #[test]
    fn season_composition() {
        assert_eq!(season_label(true, false), "Summer");
        assert_eq!(season_label(false, true), "Winter");
        assert_eq!(season_label(true, true), "Summer, Winter");
        assert_eq!(season_label(false, false), "Year-round");
    }

    #[test]
    fn length_km_rounds_to_one_decimal() {
        assert_eq!(length_km(Some(5200.0)), 5.2);
        assert_eq!(length_km(Some(5250.0)), 5.3);
        assert_eq!(length_km(Some(123.0)), 0.1);
        assert_eq!(length_km(Some(0.0)), 0.0);
        assert_eq!(length_km(None), 0.0);
        assert_eq!(length_km(Some(f64::NAN)), 0.0);
        assert_eq!(length_km(Some(-500.0)), 0.0);
    }

    #[test]
    fn truthiness_matches_flag_encodings() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!("Y"))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(None));
    }

    #[test]
    fn first_text_prefers_earlier_candidates() {
        let attributes = attrs(json!({
            "Name_Official_e": "Lakeside Loop",
            "Nom_Officiel_f": "Boucle du Lac",
        }));
        assert_eq!(
            first_text(&attributes, &["Name_Official_e", "Nom_Officiel_f"]),
            Some("Lakeside Loop".to_string())
        );
    }

    #[test]
    fn first_text_skips_empty_and_non_string() {
        let attributes = attrs(json!({
            "Name_Official_e": "",
            "Nom_Officiel_f": 42,
            "Name": "  Ridge Walk  ",
        }));
        assert_eq!(
            first_text(&attributes, &["Name_Official_e", "Nom_Officiel_f", "Name"]),
            Some("Ridge Walk".to_string())
        );
        assert_eq!(first_text(&attributes, &["Missing"]), None);
    }
}
