//! Session store
//!
//! Single source of truth for the current identity-provider session.
//! Holds the session opaquely (it never interprets the content) and
//! notifies subscribers synchronously, in registration order, whenever the
//! session is replaced.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use studyhall_domain::Session;

/// Kind of session transition that triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChangeKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A session change delivered to subscribers
///
/// Carries the session value that caused the notification, so listeners
/// never observe a later overwrite.
#[derive(Debug, Clone)]
pub struct SessionChange {
    pub kind: SessionChangeKind,
    pub session: Option<Session>,
}

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&SessionChange) + Send + Sync>;

/// Owner of the current provider session
#[derive(Default)]
pub struct SessionStore {
    session: RwLock<Option<Session>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if any
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Replace the session and notify subscribers synchronously, in
    /// registration order.
    ///
    /// The change kind is derived from the transition: absent→present is a
    /// sign-in, present→absent (or a repeated clear) is a sign-out, and
    /// present→present is a token refresh.
    pub fn set_session(&self, session: Option<Session>) {
        let kind = {
            let mut current = self.session.write();
            let had_session = current.is_some();
            *current = session.clone();
            match (had_session, current.is_some()) {
                (false, true) => SessionChangeKind::SignedIn,
                (true, true) => SessionChangeKind::TokenRefreshed,
                (_, false) => SessionChangeKind::SignedOut,
            }
        };

        let change = SessionChange { kind, session };

        // Dispatch holds the listener lock: an unsubscribe racing with this
        // call either sees the event or misses the whole dispatch, never a
        // half-delivered one. Listeners must not re-enter the store.
        let listeners = self.listeners.lock();
        for (_, listener) in listeners.iter() {
            listener(&change);
        }
    }

    /// Register a listener; it is invoked for every subsequent change
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionChange) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Remove a listener; it stops receiving future notifications
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(listener_id, _)| *listener_id != id.0);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_session", &self.session.read().is_some())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
