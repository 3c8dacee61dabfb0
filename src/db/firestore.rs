// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage)
//! - Favorites (per-user favorite trail documents)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Favorite, User};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Document id for a favorite: the (user, trail) pair.
    fn favorite_doc_id(user_id: &str, trail_id: &str) -> String {
        format!("{}_{}", user_id, trail_id)
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by their Google subject.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.user_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Favorite Operations ─────────────────────────────────────

    /// Whether the user has favorited the trail.
    pub async fn is_favorite(&self, user_id: &str, trail_id: &str) -> Result<bool, AppError> {
        let favorite: Option<Favorite> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::FAVORITES)
            .obj()
            .one(&Self::favorite_doc_id(user_id, trail_id))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(favorite.is_some())
    }

    /// Add a favorite (idempotent upsert).
    pub async fn add_favorite(&self, favorite: &Favorite) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::FAVORITES)
            .document_id(Self::favorite_doc_id(
                &favorite.user_id,
                &favorite.trail_id,
            ))
            .object(favorite)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Remove a favorite.
    pub async fn remove_favorite(&self, user_id: &str, trail_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::FAVORITES)
            .document_id(Self::favorite_doc_id(user_id, trail_id))
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// All favorites for a user, most recent first.
    pub async fn list_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::FAVORITES)
            .filter(move |q| q.field("user_id").eq(user_id.clone()))
            .order_by([(
                "added_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Account Deletion ────────────────────────────────────────

    /// Delete a user's profile and all their favorites.
    ///
    /// Favorites are deleted with bounded concurrency to avoid overloading
    /// Firestore; the user document goes last so a failed run stays
    /// discoverable.
    pub async fn delete_user_data(&self, user_id: &str) -> Result<(), AppError> {
        let client = self.get_client()?;

        let favorites = self.list_favorites(user_id).await?;
        let total = favorites.len();

        let failures: usize = stream::iter(favorites)
            .map(|favorite| async move {
                let doc_id = Self::favorite_doc_id(&favorite.user_id, &favorite.trail_id);
                let result = client
                    .fluent()
                    .delete()
                    .from(collections::FAVORITES)
                    .document_id(&doc_id)
                    .execute()
                    .await;

                if let Err(e) = &result {
                    tracing::warn!(error = %e, doc_id = %doc_id, "Failed to delete favorite");
                }
                result.is_err() as usize
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .fold(0, |acc, failed| async move { acc + failed })
            .await;

        if failures > 0 {
            return Err(AppError::Database(format!(
                "Failed to delete {} of {} favorites",
                failures, total
            )));
        }

        client
            .fluent()
            .delete()
            .from(collections::USERS)
            .document_id(user_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(user_id = %user_id, favorites = total, "Deleted user data");
        Ok(())
    }
}
