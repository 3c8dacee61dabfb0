// SPDX-License-Identifier: MIT

//! Authenticated routes: profile, favorites, account deletion.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Favorite;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_TRAIL_ID_LEN: usize = 64;

/// Routes requiring authentication; the auth middleware is applied in
/// routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/favorites", get(list_favorites))
        .route(
            "/api/favorites/{trail_id}",
            get(favorite_status)
                .put(add_favorite)
                .delete(remove_favorite),
        )
        .route("/api/account", delete(delete_account))
}

/// The upstream object id is numeric and generated ids are short; anything
/// longer is garbage and gets rejected before touching the database.
fn validate_trail_id(trail_id: &str) -> Result<()> {
    if trail_id.is_empty() || trail_id.len() > MAX_TRAIL_ID_LEN {
        return Err(AppError::BadRequest("Invalid trail id".to_string()));
    }
    Ok(())
}

// ─── User Profile ────────────────────────────────────────────

/// Current user response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub user_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(UserResponse {
        user_id: profile.user_id,
        display_name: profile.display_name,
        email: profile.email,
        photo_url: profile.photo_url,
    }))
}

// ─── Favorites ───────────────────────────────────────────────

/// List the user's favorites, most recent first.
async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Favorite>>> {
    let favorites = state.db.list_favorites(&user.user_id).await?;
    Ok(Json(favorites))
}

/// Whether one trail is favorited.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteStatusResponse {
    pub favorite: bool,
}

async fn favorite_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(trail_id): Path<String>,
) -> Result<Json<FavoriteStatusResponse>> {
    validate_trail_id(&trail_id)?;
    let favorite = state.db.is_favorite(&user.user_id, &trail_id).await?;
    Ok(Json(FavoriteStatusResponse { favorite }))
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(trail_id): Path<String>,
) -> Result<Json<Favorite>> {
    validate_trail_id(&trail_id)?;

    let favorite = Favorite {
        user_id: user.user_id,
        trail_id,
        added_at: chrono::Utc::now().to_rfc3339(),
    };
    state.db.add_favorite(&favorite).await?;

    Ok(Json(favorite))
}

#[derive(Serialize)]
struct RemovedResponse {
    success: bool,
}

async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(trail_id): Path<String>,
) -> Result<Json<RemovedResponse>> {
    validate_trail_id(&trail_id)?;
    state.db.remove_favorite(&user.user_id, &trail_id).await?;
    Ok(Json(RemovedResponse { success: true }))
}

// ─── Account Deletion ────────────────────────────────────────

/// Response for account deletion.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteAccountResponse {
    pub success: bool,
    pub message: String,
}

/// Delete the user's profile and all their favorites.
async fn delete_account(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DeleteAccountResponse>> {
    tracing::info!(user_id = %user.user_id, "User-initiated account deletion");

    state.db.delete_user_data(&user.user_id).await?;

    Ok(Json(DeleteAccountResponse {
        success: true,
        message: "Account deleted. All data has been removed.".to_string(),
    }))
}
