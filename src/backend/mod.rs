//! Client for the auth/favorites backend service.

mod client;
mod error;

pub use client::{AuthResponse, BackendClient};
pub use error::{AuthError, FavoritesApiError};
