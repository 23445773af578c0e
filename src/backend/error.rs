//! Error types for the auth/favorites backend client.

use thiserror::Error;

/// Errors from the register/login endpoints. Surfaced inline on the
/// form; never retried.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the credentials or registration payload.
    /// Carries the backend's own message when one was returned.
    #[error("{message}")]
    Rejected { message: String },

    #[error("Auth request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors from the favorites endpoints.
///
/// HTTP 401 is kept distinct: it is the sole signal that the caller must
/// log in, as opposed to a transient failure.
#[derive(Debug, Error)]
pub enum FavoritesApiError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Favorites endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Favorites request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid country code")]
    InvalidCode,
}
