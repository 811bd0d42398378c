use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    errors::{ApiError, SessionError},
    setup::Config,
    utils::{cookies::SESSION_COOKIE, jwt::verify_session_token},
};

/// The authenticated caller of a protected route, recovered from the
/// session cookie. Holds the student record key embedded in the token.
pub struct AuthStudent {
    pub student_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthStudent
where
    S: Send + Sync,
{
    type Rejection = ApiError<SessionError>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<Config>()
            .ok_or(ApiError(SessionError::MissingConfig))?;

        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or(ApiError(SessionError::NotLoggedIn))?;

        let student_id = verify_session_token(cookie.value(), &config.jwt_secret)
            .map_err(|_| ApiError(SessionError::InvalidSession))?;

        Ok(AuthStudent { student_id })
    }
}
