// SPDX-License-Identifier: MIT

//! Search behavior over a constructed trail list.

use geojson::Geometry;
use trail_atlas::models::{Difficulty, Surface, TrailRecord};
use trail_atlas::services::search::{filter_trails, matches_query};
use trail_atlas::services::RegionResolver;

fn trail(id: &str, name: &str) -> TrailRecord {
    TrailRecord {
        id: id.to_string(),
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

fn sample_trails() -> Vec<TrailRecord> {
    let mut lakeside = trail("1", "Lakeside Loop");
    lakeside.surface = Surface::Paved;
    lakeside.width = 2.0;
    lakeside.difficulty = Difficulty::Easy;
    lakeside.park = "Banff National Park".to_string();
    lakeside.province = "Alberta".to_string();

    let mut ridge = trail("2", "Ridge Scramble");
    ridge.difficulty = Difficulty::Difficult;
    ridge.description = "Exposed mountain ridge with views".to_string();

    let mut narrow = trail("3", "Narrow Boardwalk");
    narrow.surface = Surface::Boardwalk;
    narrow.width = 0.5;

    let mut urban = trail("4", "Bow River Pathway");
    urban.surface = Surface::Paved;
    urban.width = 3.0;
    urban.geometry = Some(Geometry::new(geojson::Value::LineString(vec![vec![
        -114.05, 51.05,
    ]])));
    urban.province = "Alberta".to_string();

    vec![lakeside, ridge, narrow, urban]
}

#[test]
fn test_search_result_is_subset_preserving_order() {
    let resolver = RegionResolver::default();
    let trails = sample_trails();
    let input_ids: Vec<String> = trails.iter().map(|t| t.id.clone()).collect();

    for query in ["lake", "mountain", "alberta", "wheelchair", "dog", "zzz"] {
        let result = filter_trails(&resolver, query, sample_trails());

        // Subset: every result id exists in the input
        for record in &result {
            assert!(input_ids.contains(&record.id), "query {:?}", query);
        }

        // Order: ids appear in ascending input order
        let positions: Vec<usize> = result
            .iter()
            .map(|r| input_ids.iter().position(|id| *id == r.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "query {:?}", query);
    }
}

#[test]
fn test_every_name_substring_match_is_included() {
    let resolver = RegionResolver::default();
    let query = "ridge";

    let result = filter_trails(&resolver, query, sample_trails());

    for original in sample_trails() {
        if original.name.to_lowercase().contains(query) {
            assert!(
                result.iter().any(|r| r.id == original.id),
                "missing {}",
                original.name
            );
        }
    }
}

#[test]
fn test_wheelchair_query_requires_width() {
    let resolver = RegionResolver::default();
    let result = filter_trails(&resolver, "wheelchair accessible", sample_trails());

    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    // Paved 2 m and 3 m wide qualify; the 0.5 m boardwalk does not.
    assert!(ids.contains(&"1"));
    assert!(ids.contains(&"4"));
    assert!(!ids.contains(&"3"));
}

#[test]
fn test_city_query_matches_nearby_geometry_only() {
    let resolver = RegionResolver::default();
    let result = filter_trails(&resolver, "calgary", sample_trails());

    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);
}

#[test]
fn test_unmatched_query_returns_empty() {
    let resolver = RegionResolver::default();
    let result = filter_trails(&resolver, "zzz-nonexistent", sample_trails());
    assert!(result.is_empty());
}

#[test]
fn test_matching_is_idempotent_per_trail() {
    let resolver = RegionResolver::default();
    let trails = sample_trails();

    for t in &trails {
        let first = matches_query(&resolver, "alberta", t);
        let second = matches_query(&resolver, "alberta", t);
        assert_eq!(first, second);
    }
}
