// SPDX-License-Identifier: MIT

//! Heuristic free-text search over normalized trails.
//!
//! Search is a stable filter: the result preserves the original relative
//! order and is always a subset of the input list. A trail is included when
//! the query matches it textually, or when any trigger-keyword rule fires
//! against its structured fields.

use crate::models::{Difficulty, Surface, TrailRecord};
use crate::services::regions::RegionResolver;

const WATER_TERMS: &[&str] = &["water", "lake", "river", "falls", "creek"];
const SCENERY_TERMS: &[&str] = &["mountain", "scenic", "view"];

/// Query keyword → province name it selects for.
const PROVINCE_KEYWORDS: &[(&str, &str)] = &[
    ("alberta", "alberta"),
    ("british columbia", "british columbia"),
    ("bc", "british columbia"),
    ("ontario", "ontario"),
    ("quebec", "quebec"),
];

/// Filter a trail list by a free-text query, preserving order.
pub fn filter_trails(
    resolver: &RegionResolver,
    query: &str,
    trails: Vec<TrailRecord>,
) -> Vec<TrailRecord> {
    let query = query.to_lowercase();
    trails
        .into_iter()
        .filter(|trail| matches_query(resolver, &query, trail))
        .collect()
}

/// Whether one trail is relevant to an already-lowercased query.
pub fn matches_query(resolver: &RegionResolver, query: &str, trail: &TrailRecord) -> bool {
    text_match(query, trail)
        || dog_rule(query, trail)
        || family_rule(query, trail)
        || wheelchair_rule(query, trail)
        || bike_rule(query, trail)
        || term_rule(query, trail, WATER_TERMS)
        || term_rule(query, trail, SCENERY_TERMS)
        || city_rule(resolver, query, trail)
        || province_rule(query, trail)
}

/// Case-insensitive substring match across the trail's text fields.
fn text_match(query: &str, trail: &TrailRecord) -> bool {
    trail.name.to_lowercase().contains(query)
        || trail.park.to_lowercase().contains(query)
        || trail.province.to_lowercase().contains(query)
        || trail.description.to_lowercase().contains(query)
        || trail.difficulty.as_str().contains(query)
        || trail.surface.as_str().to_lowercase().contains(query)
        || trail.season.to_lowercase().contains(query)
}

fn dog_rule(query: &str, trail: &TrailRecord) -> bool {
    query.contains("dog")
        && matches!(
            trail.surface,
            Surface::Paved | Surface::Boardwalk | Surface::Gravel
        )
}

fn family_rule(query: &str, trail: &TrailRecord) -> bool {
    query.contains("family") && (trail.difficulty == Difficulty::Easy || trail.length <= 5.0)
}

fn wheelchair_rule(query: &str, trail: &TrailRecord) -> bool {
    (query.contains("wheelchair") || query.contains("accessible"))
        && matches!(trail.surface, Surface::Paved | Surface::Boardwalk)
        && trail.width >= 1.0
}

fn bike_rule(query: &str, trail: &TrailRecord) -> bool {
    (query.contains("bike") || query.contains("cycling"))
        && matches!(
            trail.surface,
            Surface::Paved | Surface::Gravel | Surface::Boardwalk | Surface::Mixed
        )
}

/// Shared shape of the water and scenery rules: the query mentioning any
/// term selects trails whose name or description mentions any of them.
fn term_rule(query: &str, trail: &TrailRecord, terms: &[&str]) -> bool {
    if !terms.iter().any(|term| query.contains(term)) {
        return false;
    }
    let name = trail.name.to_lowercase();
    let description = trail.description.to_lowercase();
    terms
        .iter()
        .any(|term| name.contains(term) || description.contains(term))
}

fn city_rule(resolver: &RegionResolver, query: &str, trail: &TrailRecord) -> bool {
    let Some(point) = trail.first_point() else {
        return false;
    };
    resolver.cities_in_query(query).any(|city| city.is_near(point))
}

fn province_rule(query: &str, trail: &TrailRecord) -> bool {
    let province = trail.province.to_lowercase();
    PROVINCE_KEYWORDS
        .iter()
        .any(|(keyword, name)| query.contains(keyword) && province.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Geometry;

    fn trail(name: &str) -> TrailRecord {
        TrailRecord {
            id: "1".to_string(),
            name: name.to_string(),
            description: "No description available".to_string(),
            length: 8.0,
            width: 0.0,
            surface: Surface::Natural,
            difficulty: Difficulty::Moderate,
            season: "Year-round".to_string(),
            geometry: None,
            park: "Unknown Park".to_string(),
            province: "Unknown Province".to_string(),
            trail_system: None,
            address: None,
            url: None,
        }
    }

    fn resolver() -> RegionResolver {
        RegionResolver::default()
    }

    #[test]
    fn name_substring_matches_case_insensitively() {
        let t = trail("Lakeside Loop");
        assert!(matches_query(&resolver(), "lakeside", &t));
        assert!(matches_query(&resolver(), "side lo", &t));
        assert!(!matches_query(&resolver(), "summit", &t));
    }

    #[test]
    fn structured_fields_match_textually() {
        let mut t = trail("Plain");
        t.difficulty = Difficulty::Difficult;
        t.surface = Surface::Boardwalk;
        t.season = "Summer, Winter".to_string();
        assert!(matches_query(&resolver(), "difficult", &t));
        assert!(matches_query(&resolver(), "boardwalk", &t));
        assert!(matches_query(&resolver(), "winter", &t));
    }

    #[test]
    fn dog_rule_requires_firm_surface() {
        let mut t = trail("Plain");
        t.surface = Surface::Gravel;
        assert!(matches_query(&resolver(), "dog friendly", &t));
        t.surface = Surface::Natural;
        assert!(!matches_query(&resolver(), "dog friendly", &t));
    }

    #[test]
    fn family_rule_easy_or_short() {
        let mut t = trail("Plain");
        t.difficulty = Difficulty::Easy;
        t.length = 12.0;
        assert!(matches_query(&resolver(), "family outing", &t));

        t.difficulty = Difficulty::Difficult;
        t.length = 4.0;
        assert!(matches_query(&resolver(), "family outing", &t));

        t.length = 5.1;
        assert!(!matches_query(&resolver(), "family outing", &t));
    }

    #[test]
    fn wheelchair_rule_needs_width() {
        let mut t = trail("Plain");
        t.surface = Surface::Paved;
        t.width = 1.5;
        assert!(matches_query(&resolver(), "wheelchair accessible", &t));

        t.width = 0.5;
        assert!(!matches_query(&resolver(), "wheelchair accessible", &t));

        t.width = 2.0;
        t.surface = Surface::Gravel;
        assert!(!matches_query(&resolver(), "wheelchair accessible", &t));
    }

    #[test]
    fn bike_rule_surface_set() {
        let mut t = trail("Plain");
        t.surface = Surface::Mixed;
        assert!(matches_query(&resolver(), "cycling routes", &t));
        t.surface = Surface::Natural;
        assert!(!matches_query(&resolver(), "cycling routes", &t));
    }

    #[test]
    fn water_terms_cross_match() {
        let mut t = trail("Thundering Falls");
        // Query says "river", trail name says "falls": both are water terms.
        assert!(matches_query(&resolver(), "river walks", &t));

        t.name = "Dry Ridge".to_string();
        assert!(!matches_query(&resolver(), "river walks", &t));
    }

    #[test]
    fn scenery_terms_match_description() {
        let mut t = trail("Plain");
        t.description = "Panoramic mountain views over the pass".to_string();
        assert!(matches_query(&resolver(), "scenic", &t));
    }

    #[test]
    fn city_rule_uses_first_coordinate() {
        let mut t = trail("Plain");
        t.geometry = Some(Geometry::new(geojson::Value::LineString(vec![vec![
            -114.1, 51.0,
        ]])));
        assert!(matches_query(&resolver(), "near calgary", &t));
        assert!(!matches_query(&resolver(), "near toronto", &t));

        t.geometry = None;
        assert!(!matches_query(&resolver(), "near calgary", &t));
    }

    #[test]
    fn province_keywords_match_province_field() {
        let mut t = trail("Plain");
        t.province = "British Columbia".to_string();
        assert!(matches_query(&resolver(), "bc trails", &t));
        assert!(matches_query(&resolver(), "british columbia", &t));
        assert!(!matches_query(&resolver(), "alberta", &t));
    }

    #[test]
    fn filter_preserves_order() {
        let trails = vec![trail("Lake One"), trail("Summit"), trail("Lake Two")];
        let result = filter_trails(&resolver(), "Lake", trails);
        let names: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Lake One", "Lake Two"]);
    }
}
