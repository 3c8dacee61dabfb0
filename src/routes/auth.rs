// SPDX-License-Identifier: MIT

//! Session routes: Google ID-token sign-in and logout.

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, SESSION_COOKIE};
use crate::models::User;
use crate::services::IdentityError;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/session", post(create_session))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    id_token: String,
}

/// Session creation response: the token is also set as an HttpOnly cookie.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub token: String,
    pub user_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// Exchange a verified Google ID token for a session JWT.
async fn create_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<SessionRequest>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    if request.id_token.trim().is_empty() {
        return Err(AppError::BadRequest("id_token is required".to_string()));
    }

    let identity = state
        .identity
        .verify_id_token(&request.id_token)
        .await
        .map_err(|e| match e {
            IdentityError::Rejected(msg) => {
                tracing::warn!(reason = %msg, "Rejected sign-in token");
                AppError::InvalidToken
            }
            IdentityError::Transient(msg) => {
                AppError::Internal(anyhow::anyhow!("identity verification failed: {}", msg))
            }
        })?;

    let now = chrono::Utc::now().to_rfc3339();

    // Preserve created_at across sign-ins; everything else refreshes from
    // the Google profile.
    let created_at = match state.db.get_user(&identity.subject).await {
        Ok(Some(existing)) => existing.created_at,
        Ok(None) => now.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load existing user, treating as new");
            now.clone()
        }
    };

    let user = User {
        user_id: identity.subject.clone(),
        email: identity.email,
        display_name: identity.name.unwrap_or_else(|| "Explorer".to_string()),
        photo_url: identity.picture,
        created_at,
        last_active: now,
    };

    if let Err(e) = state.db.upsert_user(&user).await {
        tracing::warn!(error = %e, "Failed to store user profile, continuing anyway");
    }

    let token = create_jwt(&user.user_id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(user_id = %user.user_id, "Session created");

    Ok((
        jar.add(cookie),
        Json(SessionResponse {
            token,
            user_id: user.user_id,
            display_name: user.display_name,
            photo_url: user.photo_url,
        }),
    ))
}

#[derive(Serialize)]
struct LogoutResponse {
    success: bool,
}

/// Clear the session cookie.
async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (
        jar.remove(removal),
        Json(LogoutResponse { success: true }),
    )
}
