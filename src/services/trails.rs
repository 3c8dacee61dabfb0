// SPDX-License-Identifier: MIT

//! Trail fetching and normalization service.
//!
//! One fetch is one independent pass: query the upstream feature service,
//! turn every raw feature into a [`TrailRecord`], and hand the list back.
//! Nothing is cached between calls and no state is shared across them.

use crate::error::{AppError, Result};
use crate::models::{Surface, TrailRecord};
use crate::services::arcgis::{ArcGisClient, RawFeature, TrailQuery};
use crate::services::normalize;
use crate::services::regions::RegionResolver;
use crate::services::search;
use geo::{Coord, Point};
use geojson::Geometry;

// Field fallback chains: English field, French field, then generic aliases.
const NAME_FIELDS: &[&str] = &["Name_Official_e", "Nom_Officiel_f", "Name", "Trail_Name"];
const DESCRIPTION_FIELDS: &[&str] = &["Comments_Commentaires", "Description"];
const PARK_FIELDS: &[&str] = &["Park_Name_e", "Park_Name_f", "ParkName", "Park"];
const PROVINCE_FIELDS: &[&str] = &["Province", "Province_Territory", "ProvinceTerritory"];
const URL_FIELDS: &[&str] = &["URL_e", "URL_f"];
const TRAIL_SYSTEM_FIELDS: &[&str] = &["Trail_System", "TrailSystem"];
const ADDRESS_FIELDS: &[&str] = &["Address", "Location"];

const FALLBACK_NAME: &str = "Unnamed Trail";
const FALLBACK_DESCRIPTION: &str = "No description available";
const UNKNOWN_PARK: &str = "Unknown Park";
const UNKNOWN_PROVINCE: &str = "Unknown Province";

/// High-level trail service: fetch, lookup, and search.
#[derive(Clone)]
pub struct TrailService {
    client: ArcGisClient,
    resolver: RegionResolver,
}

impl TrailService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_resolver(base_url, RegionResolver::default())
    }

    pub fn with_resolver(base_url: impl Into<String>, resolver: RegionResolver) -> Self {
        Self {
            client: ArcGisClient::new(base_url),
            resolver,
        }
    }

    /// Fetch and normalize the trail list.
    pub async fn fetch_trails(&self, params: TrailQuery) -> Result<Vec<TrailRecord>> {
        let features = self.client.query(&params).await?;

        tracing::debug!(count = features.len(), "Normalizing trail features");

        Ok(features
            .iter()
            .enumerate()
            .map(|(position, feature)| self.feature_to_trail(feature, position))
            .collect())
    }

    /// Resolve one trail by its upstream object id.
    ///
    /// The id is validated as an integer before it is interpolated into the
    /// query predicate.
    pub async fn fetch_trail_by_id(&self, id: &str) -> Result<TrailRecord> {
        let object_id: i64 = id
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid trail id: {}", id)))?;

        let trails = self.fetch_trails(TrailQuery::by_object_id(object_id)).await?;

        trails
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Trail {}", id)))
    }

    /// Fetch everything, then filter by the free-text query.
    pub async fn search_trails(&self, query: &str) -> Result<Vec<TrailRecord>> {
        let trails = self.fetch_trails(TrailQuery::default()).await?;
        Ok(search::filter_trails(&self.resolver, query, trails))
    }

    /// Normalize one raw feature into a trail record.
    ///
    /// Total: every attribute has a safe default, so this cannot fail.
    /// `position` is the feature's index in the fetch, used as the id
    /// fallback when the upstream record carries no `OBJECTID`.
    pub fn feature_to_trail(&self, feature: &RawFeature, position: usize) -> TrailRecord {
        let attributes = &feature.attributes;

        let id = normalize::code_field(attributes, "OBJECTID")
            .map(|v| v.to_string())
            .unwrap_or_else(|| format!("trail-{}", position));

        let coords = extract_coords(feature);
        let first_point = coords.first().map(|c| Point::new(c.x, c.y));
        let geometry = if coords.is_empty() {
            None
        } else {
            Some(Geometry::new(geojson::Value::LineString(
                coords.iter().map(|c| vec![c.x, c.y]).collect(),
            )))
        };

        // Directly-supplied park/province win; otherwise bucket the first
        // coordinate against the region table.
        let park_attr = normalize::first_text(attributes, PARK_FIELDS);
        let province_attr = normalize::first_text(attributes, PROVINCE_FIELDS);
        let bucket = if park_attr.is_none() || province_attr.is_none() {
            first_point.and_then(|p| self.resolver.resolve_park(p))
        } else {
            None
        };

        let park = park_attr
            .or_else(|| bucket.map(|b| b.name.to_string()))
            .unwrap_or_else(|| UNKNOWN_PARK.to_string());
        let province = province_attr
            .or_else(|| bucket.map(|b| b.province.to_string()))
            .unwrap_or_else(|| UNKNOWN_PROVINCE.to_string());

        TrailRecord {
            id,
            name: normalize::first_text(attributes, NAME_FIELDS)
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            description: normalize::first_text(attributes, DESCRIPTION_FIELDS)
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            length: normalize::length_km(normalize::number_field(attributes, "Shape__Length")),
            width: normalize::number_field(attributes, "Width_Largeur_m")
                .filter(|w| w.is_finite())
                .map(|w| w.max(0.0))
                .unwrap_or(0.0),
            surface: Surface::from_code(normalize::code_field(attributes, "Surface")),
            difficulty: normalize::difficulty_from(
                normalize::code_field(attributes, "Profile_Pente"),
                normalize::code_field(attributes, "Obstacles"),
            ),
            season: normalize::season_label(
                normalize::is_truthy(attributes.get("Summer_Type_Été")),
                normalize::is_truthy(attributes.get("Winter_Type_Hiver")),
            ),
            geometry,
            park,
            province,
            trail_system: normalize::first_text(attributes, TRAIL_SYSTEM_FIELDS),
            address: normalize::first_text(attributes, ADDRESS_FIELDS),
            url: normalize::first_text(attributes, URL_FIELDS),
        }
    }
}

/// Pull WGS84 coordinates out of a raw feature.
///
/// Polyline `paths` arrive in Web Mercator and are reprojected; GeoJSON
/// `coordinates` are already geographic and pass through unchanged. Pairs
/// that fail WGS84 validation are dropped.
fn extract_coords(feature: &RawFeature) -> Vec<Coord<f64>> {
    let Some(geometry) = feature.geometry.as_ref() else {
        return Vec::new();
    };

    let raw: Vec<Coord<f64>> = if let Some(paths) = &geometry.paths {
        match paths.first() {
            Some(path) => normalize::reproject_path(path),
            None => Vec::new(),
        }
    } else if let Some(coordinates) = &geometry.coordinates {
        coordinates
            .iter()
            .map(|point| match point.as_slice() {
                [x, y, ..] => Coord { x: *x, y: *y },
                _ => Coord {
                    x: f64::NAN,
                    y: f64::NAN,
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    raw.into_iter().filter(normalize::valid_wgs84).collect()
}
