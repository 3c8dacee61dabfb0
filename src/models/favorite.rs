// SPDX-License-Identifier: MIT

//! Favorite trail record.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A favorited trail, stored in Firestore keyed by (user, trail).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Favorite {
    /// Owning user (Google subject)
    pub user_id: String,
    /// Trail identifier as served by the trails API
    pub trail_id: String,
    /// When the favorite was added (ISO 8601)
    pub added_at: String,
}
