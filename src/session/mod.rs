//! Durable auth session: key-value storage, typed store, change watcher.

pub mod storage;
pub mod store;
pub mod watcher;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError, TOKEN_KEY, USER_KEY};
pub use store::{SessionStore, UserProfile};
pub use watcher::{SessionEvent, SessionWatcher, WatcherError};
