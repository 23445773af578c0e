//! Favorites store.
//!
//! Owns the favorite set for the lifetime of the authenticated session:
//! hydrated wholesale from the remote when a token is observed, cleared
//! synchronously when the token disappears. Mutations touch local state
//! only after the remote confirms them, so there is no rollback path.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::FavoritesApiError;
use crate::session::SessionStore;

/// Errors surfaced by favorite mutations. No operation is retried; local
/// state is unchanged on any failure.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The backend answered 401: the user must log in before mutating
    /// favorites.
    #[error("Not authenticated: log in to manage favorites")]
    NotAuthenticated,

    #[error("Failed to add favorite: {source}")]
    AddFailed {
        #[source]
        source: FavoritesApiError,
    },

    #[error("Failed to remove favorite: {source}")]
    RemoveFailed {
        #[source]
        source: FavoritesApiError,
    },
}

/// Remote favorites collaborator. Implemented by `BackendClient`; tests
/// substitute fakes.
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<String>, FavoritesApiError>;
    async fn add(&self, code: &str) -> Result<(), FavoritesApiError>;
    async fn remove(&self, code: &str) -> Result<(), FavoritesApiError>;
}

/// Process-wide favorite state for the current session.
///
/// The set is an ordered list of country identifiers without duplicates.
/// It mirrors the remote list and is rebuilt from it on every auth
/// transition; it never survives a session.
pub struct FavoritesStore {
    set: RwLock<Vec<String>>,
    api: Arc<dyn FavoritesApi>,
    session: SessionStore,
}

impl FavoritesStore {
    /// Create an empty store. Call [`sync`](Self::sync) afterwards to
    /// reflect the current session.
    pub fn new(api: Arc<dyn FavoritesApi>, session: SessionStore) -> Self {
        Self {
            set: RwLock::new(Vec::new()),
            api,
            session,
        }
    }

    /// Re-derive state from the current token: hydrate when present,
    /// clear otherwise. Called at mount and on every storage change
    /// notification. No remote call is made when the token is absent.
    pub async fn sync(&self) {
        if self.session.is_authenticated() {
            self.refresh().await;
        } else {
            self.clear();
        }
    }

    /// Best-effort wholesale hydration from the remote list.
    ///
    /// Failures are logged and degrade to an empty set; nothing
    /// propagates to the caller.
    pub async fn refresh(&self) {
        match self.api.list().await {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "Hydrated favorites from backend");
                *self.set.write().expect("favorites lock poisoned") = favorites;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch favorites, resetting to empty");
                self.clear();
            }
        }
    }

    /// Add `code` remotely, then append it locally.
    ///
    /// No duplicate check is performed here: callers gate the operation
    /// by current membership.
    pub async fn add(&self, code: &str) -> Result<(), FavoritesError> {
        match self.api.add(code).await {
            Ok(()) => {
                self.set
                    .write()
                    .expect("favorites lock poisoned")
                    .push(code.to_string());
                Ok(())
            }
            Err(FavoritesApiError::Unauthorized) => Err(FavoritesError::NotAuthenticated),
            Err(source) => Err(FavoritesError::AddFailed { source }),
        }
    }

    /// Remove `code` remotely, then drop its first occurrence locally.
    pub async fn remove(&self, code: &str) -> Result<(), FavoritesError> {
        match self.api.remove(code).await {
            Ok(()) => {
                let mut set = self.set.write().expect("favorites lock poisoned");
                if let Some(pos) = set.iter().position(|c| c == code) {
                    set.remove(pos);
                }
                Ok(())
            }
            Err(source) => Err(FavoritesError::RemoveFailed { source }),
        }
    }

    /// Membership query against the current set.
    pub fn is_favorite(&self, code: &str) -> bool {
        self.set
            .read()
            .expect("favorites lock poisoned")
            .iter()
            .any(|c| c == code)
    }

    /// Snapshot of the current set, in insertion order.
    pub fn favorites(&self) -> Vec<String> {
        self.set.read().expect("favorites lock poisoned").clone()
    }

    /// Synchronous unconditional reset. Used on logout and on failed
    /// hydration.
    pub fn clear(&self) {
        self.set.write().expect("favorites lock poisoned").clear();
    }
}
