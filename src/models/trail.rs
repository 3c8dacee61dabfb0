// SPDX-License-Identifier: MIT

//! Normalized trail record and its closed attribute vocabularies.

use geo::Point;
use geojson::Geometry;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Trail surface classification.
///
/// The upstream service encodes this as an integer; anything outside the
/// known codes maps to `Unknown` so normalization is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Surface {
    Paved,
    Gravel,
    Natural,
    Boardwalk,
    Mixed,
    Unknown,
}

impl Surface {
    /// Decode the upstream surface code.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Surface::Paved,
            Some(2) => Surface::Gravel,
            Some(3) => Surface::Natural,
            Some(4) => Surface::Boardwalk,
            Some(5) => Surface::Mixed,
            _ => Surface::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Paved => "Paved",
            Surface::Gravel => "Gravel",
            Surface::Natural => "Natural",
            Surface::Boardwalk => "Boardwalk",
            Surface::Mixed => "Mixed",
            Surface::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trail difficulty rating derived from slope profile and obstacle codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized trail record, a pure function of one upstream feature.
///
/// Field names on the wire match what the frontend consumes: `length` is
/// kilometers, `width` is meters, `geometry` is a GeoJSON LineString in
/// WGS84 (longitude, latitude) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrailRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Length in kilometers, rounded to one decimal
    pub length: f64,
    /// Width in meters
    pub width: f64,
    pub surface: Surface,
    pub difficulty: Difficulty,
    /// "Summer", "Winter", "Summer, Winter", or "Year-round"
    pub season: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub geometry: Option<Geometry>,
    pub park: String,
    pub province: String,
    #[serde(rename = "trailSystem", skip_serializing_if = "Option::is_none")]
    pub trail_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TrailRecord {
    /// First coordinate of the trail geometry, if any.
    ///
    /// Used for geographic bucketing and city-proximity search.
    pub fn first_point(&self) -> Option<Point<f64>> {
        match &self.geometry.as_ref()?.value {
            geojson::Value::LineString(coords) => coords
                .first()
                .filter(|c| c.len() >= 2)
                .map(|c| Point::new(c[0], c[1])),
            _ => None,
        }
    }
}
