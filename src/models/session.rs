//! # Session Types
//!
//! [`SessionData`] is what the cookie carries. [`Session`] is the per-request
//! handle the session middleware hands to handlers through request extensions;
//! it records whether a handler changed anything so the middleware only
//! re-issues the cookie when needed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ShipSystem;

/// Per-client state persisted across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub damaged_system: Option<ShipSystem>,
}

#[derive(Debug, Default)]
struct SessionInner {
    data: SessionData,
    modified: bool,
}

/// Shared handle to the current request's session.
///
/// Cloning is cheap; all clones observe the same data.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    pub fn new(data: SessionData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                data,
                modified: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn damaged_system(&self) -> Option<ShipSystem> {
        self.lock().data.damaged_system
    }

    pub fn set_damaged_system(&self, system: ShipSystem) {
        let mut inner = self.lock();
        inner.data.damaged_system = Some(system);
        inner.modified = true;
    }

    /// Returns a snapshot of the data if any handler modified it.
    pub fn modified_data(&self) -> Option<SessionData> {
        let inner = self.lock();
        inner.modified.then(|| inner.data.clone())
    }
}
