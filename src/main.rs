// SPDX-License-Identifier: MIT

//! Trail Atlas API Server
//!
//! Serves normalized trail data from the upstream GIS feature service plus
//! favorites, AI trip insights, and place photos for the web frontend.

use std::sync::Arc;
use trail_atlas::{
    config::Config,
    db::FirestoreDb,
    services::{GoogleIdentityVerifier, InsightsService, PlacesService, TrailService},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Trail Atlas API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Trail service against the upstream feature layer
    let trails = TrailService::new(config.trails_service_url.clone());
    tracing::info!(
        upstream = %config.trails_service_url,
        "Trail service initialized"
    );

    // Google sign-in verification
    let identity = Arc::new(
        GoogleIdentityVerifier::new(&config.google_client_id)
            .expect("Failed to initialize identity verifier"),
    );

    // Gemini insights and Places proxy share the Google API key
    let insights = InsightsService::new(config.google_api_key.clone());
    let places = PlacesService::new(config.google_api_key.clone());
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY not set: insights and places degrade gracefully");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        trails,
        identity,
        insights,
        places,
    });

    // Build router
    let app = trail_atlas::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trail_atlas=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
