use axum_extra::extract::cookie::{Cookie, SameSite};
use cookie::time::Duration;

pub const SESSION_COOKIE: &str = "token";
pub const GOOGLE_TOKEN_COOKIE: &str = "googleToken";

/// Builds the http-only session cookie carrying a signed token, expiring
/// together with the token itself.
pub fn session_cookie(token: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(true)
        .http_only(true)
        .max_age(Duration::days(ttl_days))
        .build()
}

/// The Google ID token travels alongside the session cookie for OAuth
/// logins, with the same attributes and lifetime.
pub fn google_token_cookie(id_token: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((GOOGLE_TOKEN_COOKIE, id_token))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(true)
        .http_only(true)
        .max_age(Duration::days(ttl_days))
        .build()
}

/// An immediately-expiring cookie that overwrites and removes the named
/// cookie on the client.
pub fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(true)
        .http_only(true)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_and_strict() {
        let cookie = session_cookie(String::from("signed-token"), 3);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "signed-token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::days(3)));
    }

    #[test]
    fn expired_cookie_clears_the_value() {
        let cookie = expired_cookie(SESSION_COOKIE);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
