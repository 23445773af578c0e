//! Favorites state synchronized with the remote backend.

mod store;

pub use store::{FavoritesApi, FavoritesError, FavoritesStore};
