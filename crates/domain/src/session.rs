//! Session — server-held login state with a fixed time-to-live.

use chrono::{DateTime, TimeDelta, Utc};

use crate::id::SessionId;

/// An authenticated session.
///
/// Sessions live only in server memory; the client holds nothing but the
/// random [`SessionId`] token in a cookie.
#[derive(Debug, Clone)]
pub struct Session {
    /// Random token handed to the client.
    pub id: SessionId,
    /// The user this session belongs to.
    pub username: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for `username` expiring `ttl` from now.
    #[must_use]
    pub fn new(username: impl Into<String>, ttl: TimeDelta) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            username: username.into(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Whether the session has passed its expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_be_expired_right_after_creation() {
        let session = Session::new("ada", TimeDelta::hours(1));
        assert!(!session.is_expired(Utc::now()));
    }

    #[test]
    fn should_be_expired_after_ttl_elapses() {
        let session = Session::new("ada", TimeDelta::hours(1));
        let later = session.created_at + TimeDelta::hours(2);
        assert!(session.is_expired(later));
    }

    #[test]
    fn should_expire_exactly_at_the_boundary() {
        let session = Session::new("ada", TimeDelta::seconds(10));
        assert!(session.is_expired(session.expires_at));
    }

    #[test]
    fn should_issue_distinct_tokens() {
        let a = Session::new("ada", TimeDelta::hours(1));
        let b = Session::new("ada", TimeDelta::hours(1));
        assert_ne!(a.id, b.id);
    }
}
