// SPDX-License-Identifier: MIT

//! AI trip-insight route.

use crate::services::insights::{InsightTrail, Review};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/ai/insights", post(generate_insights))
}

#[derive(Deserialize)]
struct InsightsRequest {
    #[serde(default)]
    trail: InsightTrail,
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InsightsResponse {
    pub insights: String,
}

/// Generate trip insights for a trail.
///
/// Always answers 200: a missing key or upstream failure degrades to
/// fallback text, matching what the trail page expects.
async fn generate_insights(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InsightsRequest>,
) -> Json<InsightsResponse> {
    let insights = state
        .insights
        .generate(&request.trail, &request.reviews)
        .await;

    Json(InsightsResponse { insights })
}
