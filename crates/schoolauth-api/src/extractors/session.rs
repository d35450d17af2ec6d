//! `CurrentSession` extractor: the session handle carried in the request cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use schoolauth_auth::session::SessionToken;
use schoolauth_core::config::{SameSitePolicy, SessionConfig};

use crate::state::AppState;

/// The request's cookie jar and the session handle found in it, if any.
///
/// A missing or malformed cookie yields `token: None`; extraction never
/// rejects the request.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    /// Cookies sent with the request; handlers return it to set or clear the session cookie.
    pub jar: CookieJar,
    /// Parsed session handle.
    pub token: Option<SessionToken>,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .and_then(|cookie| SessionToken::parse(cookie.value()));

        Ok(Self { jar, token })
    }
}

impl CurrentSession {
    /// The jar with the session cookie set to `token`.
    pub fn with_token(self, config: &SessionConfig, token: &SessionToken) -> CookieJar {
        self.jar.add(session_cookie(config, token.as_str().to_string()))
    }

    /// The jar with an expired session cookie, sent whether or not the
    /// request carried one.
    pub fn cleared(self, config: &SessionConfig) -> CookieJar {
        let mut removal = session_cookie(config, String::new());
        removal.make_removal();
        self.jar.add(removal)
    }
}

fn session_cookie(config: &SessionConfig, value: String) -> Cookie<'static> {
    let same_site = match config.same_site {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::None => SameSite::None,
    };

    Cookie::build((config.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(same_site)
        .build()
}
