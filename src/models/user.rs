// SPDX-License-Identifier: MIT

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// Keyed by the Google subject claim, which is stable across email changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Google subject (also used as document ID)
    pub user_id: String,
    /// Verified email address
    pub email: Option<String>,
    /// Display name from the Google profile
    pub display_name: String,
    /// Profile picture URL
    pub photo_url: Option<String>,
    /// When the user first signed in
    pub created_at: String,
    /// Last session timestamp
    pub last_active: String,
}
