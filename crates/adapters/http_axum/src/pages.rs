//! Static page routes: the login/signup form surface and the session-gated
//! dashboard pages, with desktop/mobile variant selection.

use std::path::{Path as FsPath, PathBuf};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};
use hearth_domain::error::HearthError;

use crate::error::ApiError;
use crate::session::{SESSION_COOKIE, current_session, removal_cookie, session_cookie};
use crate::state::AppState;

/// Where the page files live.
#[derive(Debug, Clone)]
pub struct PagesConfig {
    /// Directory holding the routed HTML pages.
    pub static_dir: PathBuf,
    /// Directory served as-is for scripts and styles.
    pub public_dir: PathBuf,
}

/// User-agent fragments that select the mobile page variant.
const MOBILE_TOKENS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "webos",
    "mobile",
];

/// Whether a user-agent string looks like a mobile browser.
#[must_use]
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| ua.contains(token))
}

/// The `.mobile.html` sibling of a desktop page path.
fn mobile_variant(path: &FsPath) -> PathBuf {
    let mut variant = path.to_path_buf();
    variant.set_extension("mobile.html");
    variant
}

fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
}

/// Serve a page file, preferring the mobile variant when the user-agent is
/// mobile and the variant exists on disk.
async fn serve_file(static_dir: &FsPath, file: &str, headers: &HeaderMap) -> Response {
    let desktop = static_dir.join(file);
    let path = match user_agent(headers) {
        Some(ua) if is_mobile(ua) => {
            let mobile = mobile_variant(&desktop);
            if tokio::fs::try_exists(&mobile).await.unwrap_or(false) {
                mobile
            } else {
                desktop
            }
        }
        _ => desktop,
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "failed to read page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn gated_page<UR, DR, BS, SS>(
    state: &AppState<UR, DR, BS, SS>,
    jar: &CookieJar,
    headers: &HeaderMap,
    file: &str,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    if current_session(jar, state.sessions.as_ref()).is_none() {
        return Redirect::to("/login").into_response();
    }
    serve_file(&state.pages.static_dir, file, headers).await
}

macro_rules! page_handler {
    ($(#[doc = $doc:expr])* $name:ident, $file:expr) => {
        $(#[doc = $doc])*
        pub async fn $name<UR, DR, BS, SS>(
            State(state): State<AppState<UR, DR, BS, SS>>,
            jar: CookieJar,
            headers: HeaderMap,
        ) -> Response
        where
            UR: UserRepository + Send + Sync + 'static,
            DR: DeviceRepository + Send + Sync + 'static,
            BS: BlobStore + Send + Sync + 'static,
            SS: SessionStore + Send + Sync + 'static,
        {
            gated_page(&state, &jar, &headers, $file).await
        }
    };
}

page_handler!(
    /// `GET /home`
    home,
    "home.html"
);
page_handler!(
    /// `GET /standby`
    standby,
    "standbyclock.html"
);
page_handler!(
    /// `GET /main`
    main_page,
    "main.html"
);
page_handler!(
    /// `GET /flashcards`
    flashcards,
    "flashcards.html"
);
page_handler!(
    /// `GET /lexipractice`
    lexipractice,
    "LexiPractice.html"
);
page_handler!(
    /// `GET /lexicon-mastery`
    lexicon_mastery,
    "Lexicon Mastery.html"
);
page_handler!(
    /// `GET /dialogue`
    dialogue,
    "dialogue.html"
);

/// `GET /` — everything starts at the login page.
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login` and `GET /signup` — the combined login/signup page,
/// deliberately ungated.
pub async fn auth_page<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    headers: HeaderMap,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    serve_file(&state.pages.static_dir, "loginsignup.html", &headers).await
}

/// Login form fields.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form fields. An empty email field counts as no email.
#[derive(Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /login`
pub async fn login<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    jar: CookieJar,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    match state
        .auth_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            let session = state.sessions.create(&user.username);
            let jar = jar.add(session_cookie(&session));
            (jar, Redirect::to("/home")).into_response()
        }
        Err(HearthError::Auth(_)) => {
            Html(r#"Invalid login. <a href="/login">Try again</a>"#).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// `POST /signup`
pub async fn signup<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    axum::Form(form): axum::Form<SignupForm>,
) -> Response
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    let email = form.email.filter(|email| !email.is_empty());
    match state
        .auth_service
        .signup(&form.username, &form.password, email)
        .await
    {
        Ok(_) => Html(r#"Signup successful! <a href="/login">Login here</a>"#).into_response(),
        Err(HearthError::Auth(_)) => {
            Html(r#"User already exists. <a href="/signup">Try again</a>"#).into_response()
        }
        Err(HearthError::Validation(_)) => {
            Html(r#"Username and password are required. <a href="/signup">Try again</a>"#)
                .into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// `GET /logout` — destroy the server-side session and clear the cookie.
pub async fn logout<UR, DR, BS, SS>(
    State(state): State<AppState<UR, DR, BS, SS>>,
    jar: CookieJar,
) -> (CookieJar, Redirect)
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && let Ok(id) = cookie.value().parse()
    {
        state.sessions.remove(id);
    }
    (jar.remove(removal_cookie()), Redirect::to("/login"))
}

/// Build the page sub-router.
pub fn routes<UR, DR, BS, SS>() -> Router<AppState<UR, DR, BS, SS>>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route(
            "/login",
            get(auth_page::<UR, DR, BS, SS>).post(login::<UR, DR, BS, SS>),
        )
        .route(
            "/signup",
            get(auth_page::<UR, DR, BS, SS>).post(signup::<UR, DR, BS, SS>),
        )
        .route("/logout", get(logout::<UR, DR, BS, SS>))
        .route("/home", get(home::<UR, DR, BS, SS>))
        .route("/standby", get(standby::<UR, DR, BS, SS>))
        .route("/main", get(main_page::<UR, DR, BS, SS>))
        .route("/flashcards", get(flashcards::<UR, DR, BS, SS>))
        .route("/lexipractice", get(lexipractice::<UR, DR, BS, SS>))
        .route("/lexicon-mastery", get(lexicon_mastery::<UR, DR, BS, SS>))
        .route("/dialogue", get(dialogue::<UR, DR, BS, SS>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_common_mobile_user_agents() {
        assert!(is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile("Opera Mini/36.2"));
    }

    #[test]
    fn should_not_flag_desktop_user_agents() {
        assert!(!is_mobile(
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0"
        ));
        assert!(!is_mobile(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/605.1.15"
        ));
    }

    #[test]
    fn should_match_case_insensitively() {
        assert!(is_mobile("SomeThing ANDROID SomeThing"));
    }

    #[test]
    fn should_build_mobile_variant_path() {
        let variant = mobile_variant(FsPath::new("/assets/static/home.html"));
        assert_eq!(variant, PathBuf::from("/assets/static/home.mobile.html"));
    }

    #[test]
    fn should_build_mobile_variant_for_names_with_spaces() {
        let variant = mobile_variant(FsPath::new("/a/Lexicon Mastery.html"));
        assert_eq!(variant, PathBuf::from("/a/Lexicon Mastery.mobile.html"));
    }
}
