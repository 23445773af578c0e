//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::sync::Arc;

use atlascope::session::{MemoryStorage, SessionStore, UserProfile};

pub fn test_user() -> UserProfile {
    UserProfile {
        id: Some("u1".to_string()),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

/// A session store over in-memory storage, logged out.
pub fn memory_session() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::new()))
}

/// A session store over in-memory storage with a persisted token.
pub fn logged_in_session(token: &str) -> SessionStore {
    let session = memory_session();
    session.persist(&test_user(), token).unwrap();
    session
}
