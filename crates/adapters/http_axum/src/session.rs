//! Session cookie plumbing.
//!
//! The cookie carries nothing but the random session token; everything else
//! lives server-side, so there is no signed payload and no signing secret.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use hearth_app::ports::SessionStore;
use hearth_domain::session::Session;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "hearth_session";

/// Build the cookie handed out on login.
///
/// `HttpOnly` and `SameSite=Lax`, max-age matching the server-side TTL.
#[must_use]
pub fn session_cookie(session: &Session) -> Cookie<'static> {
    let ttl = session.expires_at - session.created_at;
    Cookie::build((SESSION_COOKIE, session.id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Build the removal cookie used on logout.
#[must_use]
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Resolve the live session behind the request's cookie, if any.
///
/// A missing cookie, an unparseable token, and an expired session all look
/// the same: no session.
pub fn current_session<SS: SessionStore>(jar: &CookieJar, sessions: &SS) -> Option<Session> {
    let raw = jar.get(SESSION_COOKIE)?.value();
    let id = raw.parse().ok()?;
    sessions.get(id)
}
