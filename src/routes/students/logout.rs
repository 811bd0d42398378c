use axum::Json;
use axum_extra::extract::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, routes::students::LogoutError},
    utils::cookies::{expired_cookie, GOOGLE_TOKEN_COOKIE, SESSION_COOKIE},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
}

#[axum::debug_handler]
pub async fn logout(
    jar: CookieJar,
) -> Result<(CookieJar, (StatusCode, Json<RouteOutput>)), ApiError<LogoutError>> {
    if jar.get(SESSION_COOKIE).is_none() {
        return Err(ApiError(LogoutError::NotLoggedIn));
    }

    // Both cookies are overwritten with immediately-expiring ones.
    let jar = jar
        .add(expired_cookie(SESSION_COOKIE))
        .add(expired_cookie(GOOGLE_TOKEN_COOKIE));

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RouteOutput {
                success: true,
                message: String::from("Logged out successfully"),
            }),
        ),
    ))
}
