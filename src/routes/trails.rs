// SPDX-License-Identifier: MIT

//! Trail listing, lookup, and search routes.

use crate::error::{AppError, Result};
use crate::models::TrailRecord;
use crate::services::TrailQuery;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trails", get(list_trails))
        .route("/api/trails/search", post(search_trails))
        .route("/api/trails/{id}", get(get_trail))
}

/// Full normalized trail listing.
async fn list_trails(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TrailRecord>>> {
    let trails = state.trails.fetch_trails(TrailQuery::default()).await?;
    Ok(Json(trails))
}

/// Single trail by upstream object id.
async fn get_trail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrailRecord>> {
    let trail = state.trails.fetch_trail_by_id(&id).await?;
    Ok(Json(trail))
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(default)]
    query: String,
}

/// Free-text trail search.
async fn search_trails(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<TrailRecord>>> {
    if request.query.trim().is_empty() {
        return Err(AppError::BadRequest("Search query is required".to_string()));
    }

    let trails = state.trails.search_trails(&request.query).await?;
    Ok(Json(trails))
}
