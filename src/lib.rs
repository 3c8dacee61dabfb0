// SPDX-License-Identifier: MIT

//! Trail Atlas: discover Canadian park trails
//!
//! This crate provides the backend API for fetching trail data from the
//! upstream GIS feature service, normalizing it into trail records, and
//! serving search, favorites, and trip-insight features.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use db::FirestoreDb;
use services::{GoogleIdentityVerifier, InsightsService, PlacesService, TrailService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub trails: TrailService,
    pub identity: Arc<GoogleIdentityVerifier>,
    pub insights: InsightsService,
    pub places: PlacesService,
}
