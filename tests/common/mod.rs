// SPDX-License-Identifier: MIT

use std::sync::Arc;
use trail_atlas::config::Config;
use trail_atlas::db::FirestoreDb;
use trail_atlas::routes::create_router;
use trail_atlas::services::{GoogleIdentityVerifier, InsightsService, PlacesService, TrailService};
use trail_atlas::AppState;

/// Create a test app with offline mock dependencies.
///
/// The trail service points at an unreachable localhost port, so routes
/// that reach upstream surface `trail_service_unavailable` instead of
/// touching the network.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = FirestoreDb::new_mock();
    let trails = TrailService::new(config.trails_service_url.clone());
    let identity = Arc::new(
        GoogleIdentityVerifier::new(&config.google_client_id)
            .expect("Failed to build identity verifier"),
    );
    let insights = InsightsService::new(None);
    let places = PlacesService::new(None);

    let state = Arc::new(AppState {
        config,
        db,
        trails,
        identity,
        insights,
        places,
    });

    (create_router(state.clone()), state)
}

/// Mint a session JWT for tests.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    trail_atlas::middleware::auth::create_jwt(user_id, signing_key).expect("Failed to create JWT")
}
