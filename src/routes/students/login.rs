use axum::{Extension, Json};
use axum_extra::extract::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::LoginError},
    services::database::{student::StudentSummary, DatabaseLayer},
    setup::Config,
    utils::{cookies::session_cookie, crypto::verify_password_hash, jwt::sign_session_token},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    is_new_student: bool,
    student: StudentSummary,
}

#[axum::debug_handler]
pub async fn login(
    Extension(config): Extension<Config>,
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(CookieJar, (StatusCode, Json<RouteOutput>)), ApiError<LoginError>> {
    // 1. Validate payload input
    payload.validate()?;

    let email = payload.email.to_lowercase();

    // 2. Look up the account
    let student = database_layer
        .query()
        .student
        .get_by_email(email)
        .await?
        .ok_or(ApiError(LoginError::NotFound))?;

    // A Google-only account has no hash to check against.
    let password_hash = student
        .password_hash
        .clone()
        .ok_or(ApiError(LoginError::NotPasswordRegistered))?;

    // 3. Verify credentials
    let password_matches = verify_password_hash(payload.password, password_hash).await?;

    if !password_matches {
        return Err(ApiError(LoginError::InvalidCredentials));
    }

    // 4. Mint the session and set the cookie
    let token = sign_session_token(&student.key(), &config.jwt_secret, config.session_ttl_days)?;
    let jar = jar.add(session_cookie(token, config.session_ttl_days));

    tracing::debug!(student_id = %student.key(), "student logged in");

    // A fresh account has no subjects linked yet.
    let is_new_student = student.subjects.is_empty();

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RouteOutput {
                success: true,
                message: String::from("Login successful"),
                is_new_student,
                student: StudentSummary::from(student),
            }),
        ),
    ))
}
