//! Session storage change notification.
//!
//! Watches the session storage directory and notifies subscribers when
//! another process touches the token or user keys (cross-process logout
//! detection). Consumers re-derive their state from the notification
//! instead of polling storage.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::session::storage::{TOKEN_KEY, USER_KEY};

/// Errors that can occur when starting the session watcher.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Failed to create storage watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("Failed to create storage directory: {0}")]
    CreateDir(#[from] io::Error),
}

/// Notification that the session keys may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    StorageChanged,
}

/// Watches the session storage directory for external changes.
///
/// Runs a background debounce thread to group rapid writes (login
/// persists two keys back-to-back). Sends `SessionEvent::StorageChanged`
/// on the subscriber channel once per settled burst.
pub struct SessionWatcher {
    // The watcher is kept alive by being stored here.
    // When SessionWatcher is dropped, the watcher thread stops.
    _watcher: RecommendedWatcher,
    _debounce_handle: thread::JoinHandle<()>,
}

impl SessionWatcher {
    /// Start watching `dir` for session key changes.
    ///
    /// The directory is created if it does not exist yet, since the
    /// watcher may start before the first login ever writes a key.
    pub fn start(
        dir: &Path,
        event_tx: mpsc::Sender<SessionEvent>,
        debounce_ms: u64,
    ) -> Result<Self, WatcherError> {
        std::fs::create_dir_all(dir)?;

        // Channel for raw file events
        let (raw_tx, raw_rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = raw_tx.send(event);
                }
            },
            notify::Config::default(),
        )?;

        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        let debounce_handle = thread::spawn(move || {
            debounce_loop(raw_rx, event_tx, debounce_ms);
        });

        Ok(Self {
            _watcher: watcher,
            _debounce_handle: debounce_handle,
        })
    }
}

/// Debounce loop that groups rapid storage changes.
///
/// Waits for `debounce_ms` after the last event before notifying.
fn debounce_loop(rx: mpsc::Receiver<Event>, event_tx: mpsc::Sender<SessionEvent>, debounce_ms: u64) {
    let debounce = Duration::from_millis(debounce_ms);
    let mut pending: Option<Instant> = None;

    loop {
        let timeout = if pending.is_some() {
            debounce
        } else {
            // Long timeout when nothing is pending
            Duration::from_secs(60)
        };

        match rx.recv_timeout(timeout) {
            Ok(event) => {
                if is_session_event(&event) {
                    pending = Some(Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(last) = pending {
                    if last.elapsed() >= debounce {
                        tracing::debug!("Session storage changed");
                        if event_tx.send(SessionEvent::StorageChanged).is_err() {
                            // Subscriber is gone, stop notifying.
                            break;
                        }
                        pending = None;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                // Watcher was dropped, exit the loop
                break;
            }
        }
    }
}

/// Check if a notify event affects one of the session keys.
fn is_session_event(event: &Event) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );

    if !relevant {
        return false;
    }

    event.paths.iter().any(|p| {
        p.file_name()
            .map(|name| name == OsStr::new(TOKEN_KEY) || name == OsStr::new(USER_KEY))
            .unwrap_or(false)
    })
}
