// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod arcgis;
pub mod identity;
pub mod insights;
pub mod normalize;
pub mod places;
pub mod regions;
pub mod search;
pub mod trails;

pub use arcgis::{ArcGisClient, RawFeature, TrailQuery};
pub use identity::{GoogleIdentityVerifier, IdentityError, VerifiedIdentity};
pub use insights::InsightsService;
pub use places::PlacesService;
pub use regions::RegionResolver;
pub use trails::TrailService;
