//! Keyed storage of per-user sessions.

use crate::session::Session;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

/// Opaque user or conversation identifier.
pub type UserId = String;

/// Shared handle to one user's session.
///
/// Locking the handle serializes every event for that user.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Locks a session handle, recovering the data if a holder panicked.
///
/// Session updates never leave a half-written state between statements, so a
/// poisoned session is still consistent.
pub fn lock(handle: &SessionHandle) -> MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Maps user ids to their sessions.
///
/// The outer map lock is held only long enough to look up or insert an entry.
/// Work on a session happens under that session's own lock, so different
/// users never wait on each other. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<UserId, SessionHandle>>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self::default()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<UserId, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the user's session, starting one if none exists.
    #[instrument(skip(self))]
    pub fn get_or_create(&self, id: &str) -> SessionHandle {
        let mut sessions = self.map();
        Arc::clone(sessions.entry(id.to_string()).or_insert_with(|| {
            info!(user_id = id, "Creating new session");
            Arc::new(Mutex::new(Session::start()))
        }))
    }

    /// Returns the user's session if one exists.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        let session = self.map().get(id).cloned();
        if session.is_none() {
            debug!(user_id = id, "Session not found");
        }
        session
    }

    /// Replaces the user's session with a freshly started one.
    ///
    /// The existing handle is reset in place so anyone holding it sees the new
    /// game.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> SessionHandle {
        let handle = self.get_or_create(id);
        *lock(&handle) = Session::start();
        info!(user_id = id, "Session reset");
        handle
    }

    /// Stores `session` for the user, overwriting any previous one.
    #[instrument(skip(self, session), fields(phase = %session.phase()))]
    pub fn replace(&self, id: &str, session: Session) {
        let handle = self.get_or_create(id);
        *lock(&handle) = session;
        debug!(user_id = id, "Session replaced");
    }

    /// Drops the user's session.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Option<Session> {
        let handle = self.map().remove(id)?;
        info!(user_id = id, "Session removed");
        let session = lock(&handle).clone();
        Some(session)
    }

    /// Runs `f` on the user's session under its lock, creating the session
    /// first if needed.
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let handle = self.get_or_create(id);
        let mut session = lock(&handle);
        f(&mut *session)
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    /// True if no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}
