//! Database model type aliases.

/// A user's favorite; see [`crate::model::favorite::FavoriteItem`] for the typed view.
pub type FavoriteModel = entity::favorite::Model;
