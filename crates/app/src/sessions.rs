//! In-memory session store.
//!
//! Sessions are process-local by design: restarting the server logs everyone
//! out. Expired entries are dropped lazily when they are next looked up.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{TimeDelta, Utc};

use hearth_domain::id::SessionId;
use hearth_domain::session::Session;

use crate::ports::SessionStore;

/// Lock-guarded map of live sessions with a fixed TTL.
pub struct InMemorySessionStore {
    ttl: TimeDelta,
    sessions: Mutex<HashMap<SessionId, Session>>,
}

impl InMemorySessionStore {
    /// Create a store issuing sessions that expire `ttl` after creation.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The TTL applied to every issued session.
    #[must_use]
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Number of live (non-expired) sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Utc::now();
        let sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.values().filter(|s| !s.is_expired(now)).count()
    }

    /// Whether no live sessions exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, username: &str) -> Session {
        let session = Session::new(username, self.ttl);
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.insert(session.id, session.clone());
        tracing::debug!(%username, session = %session.id, "session created");
        session
    }

    fn get(&self, id: SessionId) -> Option<Session> {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        match sessions.get(&id) {
            Some(session) if session.is_expired(Utc::now()) => {
                sessions.remove(&id);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    fn remove(&self, id: SessionId) {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        if sessions.remove(&id).is_some() {
            tracing::debug!(session = %id, "session destroyed");
        }
    }
}
