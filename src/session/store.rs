//! Typed facade over the two session storage keys.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::session::storage::{SessionStorage, StorageError, TOKEN_KEY, USER_KEY};

/// Profile returned by the auth backend and persisted alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

/// Read/write access to the auth session.
///
/// Token presence is the single signal consumers use to decide whether a
/// session exists; the profile is informational. Values are read from
/// storage on every call, never cached, so external changes take effect
/// immediately.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// The stored bearer token, if a non-empty one is present.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored user profile. A corrupt value reads as no profile.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user profile is corrupt, ignoring");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a fresh session after register/login.
    pub fn persist(&self, user: &UserProfile, token: &str) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &serialized)?;
        self.storage.set(TOKEN_KEY, token)?;
        tracing::debug!(email = %user.email, "Session persisted");
        Ok(())
    }

    /// Drop both keys. Used on logout.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        tracing::debug!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    fn user() -> UserProfile {
        UserProfile {
            id: Some("u1".to_string()),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn fresh_store_is_unauthenticated() {
        let store = store();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn persist_then_read_back() {
        let store = store();
        store.persist(&user(), "tok-1").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok-1".to_string()));
        assert_eq!(store.user(), Some(user()));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = store();
        store.persist(&user(), "tok-1").unwrap();
        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.user(), None);
    }

    #[test]
    fn empty_token_is_unauthenticated() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "").unwrap();
        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn corrupt_profile_reads_as_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(USER_KEY, "not json").unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.user(), None);
    }
}
