// SPDX-License-Identifier: MIT

//! Geographic bucketing: park/province lookup and city proximity.
//!
//! The upstream dataset frequently omits park and province attributes, so
//! trails are bucketed against a fixed table of named bounding rectangles.
//! Containment is plain inclusive rectangle comparison and city proximity is
//! an absolute lat/lng difference; both are deliberate approximations and
//! must not be upgraded to geodesic math without a product decision.

use geo::Point;

/// A named park approximated by a bounding rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ParkBounds {
    pub name: &'static str,
    pub province: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl ParkBounds {
    /// Inclusive containment on all four sides.
    pub fn contains(&self, point: Point<f64>) -> bool {
        let (lng, lat) = (point.x(), point.y());
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// A reference point for city-keyword search.
#[derive(Debug, Clone, Copy)]
pub struct CityCenter {
    /// Lowercase keyword as it appears in queries
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Per-axis search radius in degrees
    pub radius_deg: f64,
}

impl CityCenter {
    /// Absolute-difference proximity on each axis, not great-circle distance.
    pub fn is_near(&self, point: Point<f64>) -> bool {
        (point.y() - self.lat).abs() <= self.radius_deg
            && (point.x() - self.lng).abs() <= self.radius_deg
    }
}

/// Park bounding rectangles in declaration order; the first containing
/// rectangle wins, so overlaps resolve to the earlier entry.
pub const PARK_BOUNDS: &[ParkBounds] = &[
    ParkBounds {
        name: "Banff National Park",
        province: "Alberta",
        min_lat: 50.7,
        max_lat: 52.3,
        min_lng: -116.5,
        max_lng: -115.2,
    },
    ParkBounds {
        name: "Jasper National Park",
        province: "Alberta",
        min_lat: 52.2,
        max_lat: 53.6,
        min_lng: -118.8,
        max_lng: -117.0,
    },
    ParkBounds {
        name: "Yoho National Park",
        province: "British Columbia",
        min_lat: 51.1,
        max_lat: 51.7,
        min_lng: -117.0,
        max_lng: -116.3,
    },
    ParkBounds {
        name: "Kootenay National Park",
        province: "British Columbia",
        min_lat: 50.6,
        max_lat: 51.3,
        min_lng: -116.4,
        max_lng: -115.8,
    },
    ParkBounds {
        name: "Glacier National Park",
        province: "British Columbia",
        min_lat: 51.0,
        max_lat: 51.5,
        min_lng: -117.9,
        max_lng: -117.2,
    },
    ParkBounds {
        name: "Waterton Lakes National Park",
        province: "Alberta",
        min_lat: 48.95,
        max_lat: 49.2,
        min_lng: -114.2,
        max_lng: -113.6,
    },
    ParkBounds {
        name: "Elk Island National Park",
        province: "Alberta",
        min_lat: 53.5,
        max_lat: 53.7,
        min_lng: -112.95,
        max_lng: -112.7,
    },
    ParkBounds {
        name: "Pacific Rim National Park Reserve",
        province: "British Columbia",
        min_lat: 48.7,
        max_lat: 49.2,
        min_lng: -125.8,
        max_lng: -124.8,
    },
    ParkBounds {
        name: "Bruce Peninsula National Park",
        province: "Ontario",
        min_lat: 45.1,
        max_lat: 45.3,
        min_lng: -81.7,
        max_lng: -81.3,
    },
    ParkBounds {
        name: "Point Pelee National Park",
        province: "Ontario",
        min_lat: 41.9,
        max_lat: 42.0,
        min_lng: -82.6,
        max_lng: -82.4,
    },
    ParkBounds {
        name: "Thousand Islands National Park",
        province: "Ontario",
        min_lat: 44.3,
        max_lat: 44.5,
        min_lng: -76.3,
        max_lng: -75.8,
    },
    ParkBounds {
        name: "La Mauricie National Park",
        province: "Quebec",
        min_lat: 46.6,
        max_lat: 46.9,
        min_lng: -73.2,
        max_lng: -72.7,
    },
    ParkBounds {
        name: "Forillon National Park",
        province: "Quebec",
        min_lat: 48.75,
        max_lat: 49.0,
        min_lng: -64.6,
        max_lng: -64.1,
    },
    ParkBounds {
        name: "Gros Morne National Park",
        province: "Newfoundland and Labrador",
        min_lat: 49.4,
        max_lat: 49.8,
        min_lng: -58.1,
        max_lng: -57.5,
    },
    ParkBounds {
        name: "Fundy National Park",
        province: "New Brunswick",
        min_lat: 45.5,
        max_lat: 45.7,
        min_lng: -65.1,
        max_lng: -64.9,
    },
    ParkBounds {
        name: "Cape Breton Highlands National Park",
        province: "Nova Scotia",
        min_lat: 46.6,
        max_lat: 46.9,
        min_lng: -60.9,
        max_lng: -60.3,
    },
    ParkBounds {
        name: "Prince Albert National Park",
        province: "Saskatchewan",
        min_lat: 53.8,
        max_lat: 54.3,
        min_lng: -106.6,
        max_lng: -105.8,
    },
    ParkBounds {
        name: "Riding Mountain National Park",
        province: "Manitoba",
        min_lat: 50.5,
        max_lat: 51.0,
        min_lng: -100.6,
        max_lng: -99.5,
    },
];

/// City reference points for the proximity search keywords.
pub const CITY_CENTERS: &[CityCenter] = &[
    CityCenter {
        name: "calgary",
        lat: 51.0447,
        lng: -114.0719,
        radius_deg: 1.0,
    },
    CityCenter {
        name: "vancouver",
        lat: 49.2827,
        lng: -123.1207,
        radius_deg: 1.0,
    },
    CityCenter {
        name: "toronto",
        lat: 43.6532,
        lng: -79.3832,
        radius_deg: 1.0,
    },
    CityCenter {
        name: "montreal",
        lat: 45.5019,
        lng: -73.5674,
        radius_deg: 1.0,
    },
    CityCenter {
        name: "ottawa",
        lat: 45.4215,
        lng: -75.6972,
        radius_deg: 1.0,
    },
    CityCenter {
        name: "edmonton",
        lat: 53.5461,
        lng: -113.4938,
        radius_deg: 1.0,
    },
];

/// Resolver over the static region tables.
///
/// The tables are injected so tests can pin containment and overlap
/// behavior without depending on real park extents.
#[derive(Debug, Clone, Copy)]
pub struct RegionResolver {
    parks: &'static [ParkBounds],
    cities: &'static [CityCenter],
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(PARK_BOUNDS, CITY_CENTERS)
    }
}

impl RegionResolver {
    pub fn new(parks: &'static [ParkBounds], cities: &'static [CityCenter]) -> Self {
        Self { parks, cities }
    }

    /// First park rectangle containing the point, in declaration order.
    pub fn resolve_park(&self, point: Point<f64>) -> Option<&'static ParkBounds> {
        self.parks.iter().find(|park| park.contains(point))
    }

    /// Cities whose keyword appears in the (lowercased) query text.
    pub fn cities_in_query<'a>(
        &self,
        query: &'a str,
    ) -> impl Iterator<Item = &'static CityCenter> + 'a {
        self.cities
            .iter()
            .filter(move |city| query.contains(city.name))
    }
}
