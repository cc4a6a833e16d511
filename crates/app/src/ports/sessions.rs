//! Session port — server-held login state.
//!
//! Sessions never touch IO, so the methods are synchronous.

use hearth_domain::id::SessionId;
use hearth_domain::session::Session;

/// Server-side session storage.
pub trait SessionStore {
    /// Create a session for `username` and return it.
    fn create(&self, username: &str) -> Session;

    /// Look up a live session by token. Expired sessions are treated as
    /// absent.
    fn get(&self, id: SessionId) -> Option<Session>;

    /// Destroy a session. Removing a missing token is a no-op.
    fn remove(&self, id: SessionId);
}
