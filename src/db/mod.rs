//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Favorites keyed by "{user_id}_{trail_id}"
    pub const FAVORITES: &str = "favorites";
}
