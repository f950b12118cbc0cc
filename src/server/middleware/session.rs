use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};

use crate::server::router::RecipeState;
use crate::session::SessionId;

pub const SESSION_COOKIE: &str = "recipe_session";

/// Session id from the private cookie, or a fresh one when the cookie is missing or unreadable.
pub struct CurrentSession {
    pub id: SessionId,
    jar: PrivateCookieJar,
    ttl: Duration,
    secure: bool,
}

impl CurrentSession {
    /// Jar carrying the (re)issued session cookie; return it with the response.
    pub fn into_jar(self) -> PrivateCookieJar {
        let cookie = build_cookie(self.id, self.ttl, self.secure);
        self.jar.add(cookie)
    }
}

impl FromRequestParts<RecipeState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &RecipeState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state).await?;
        let id = jar
            .get(SESSION_COOKIE)
            .and_then(|c| SessionId::parse(c.value()))
            .unwrap_or_default();
        Ok(Self {
            id,
            jar,
            ttl: state.session_ttl,
            secure: state.secure_cookie,
        })
    }
}

impl FromRef<RecipeState> for Key {
    fn from_ref(state: &RecipeState) -> Self {
        state.cookie_key.clone()
    }
}

fn build_cookie(id: SessionId, ttl: Duration, secure: bool) -> Cookie<'static> {
    let max_age = time::Duration::seconds(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX));
    Cookie::build(Cookie::new(SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}
