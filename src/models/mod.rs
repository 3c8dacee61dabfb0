// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod favorite;
pub mod trail;
pub mod user;

pub use favorite::Favorite;
pub use trail::{Difficulty, Surface, TrailRecord};
pub use user::User;
