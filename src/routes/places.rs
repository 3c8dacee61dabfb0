// SPDX-License-Identifier: MIT

//! Google Places proxy route.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/places", get(places_proxy))
}

#[derive(Deserialize)]
struct PlacesQuery {
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, rename = "placeId")]
    place_id: Option<String>,
    #[serde(default, rename = "photoReference", alias = "photo_reference")]
    photo_reference: Option<String>,
    #[serde(default)]
    maxwidth: Option<String>,
}

/// Dispatch to the Places endpoints the frontend uses.
async fn places_proxy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlacesQuery>,
) -> Result<Response> {
    match params.endpoint.as_deref() {
        Some("textsearch") => {
            let query = params
                .query
                .filter(|q| !q.is_empty())
                .ok_or_else(|| AppError::BadRequest("query is required".to_string()))?;
            let data = state
                .places
                .text_search(&query, params.location.as_deref())
                .await?;
            Ok(Json(data).into_response())
        }
        Some("details") => {
            let place_id = params
                .place_id
                .filter(|p| !p.is_empty())
                .ok_or_else(|| AppError::BadRequest("placeId is required".to_string()))?;
            let data = state.places.details(&place_id).await?;
            Ok(Json(data).into_response())
        }
        Some("photo") => {
            let reference = params
                .photo_reference
                .filter(|r| !r.is_empty())
                .ok_or_else(|| AppError::BadRequest("photo_reference is required".to_string()))?;
            let maxwidth = params.maxwidth.unwrap_or_else(|| "800".to_string());

            let (bytes, content_type) = state.places.photo(&reference, &maxwidth).await?;
            Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
        }
        _ => Err(AppError::BadRequest("Unknown places endpoint".to_string())),
    }
}
