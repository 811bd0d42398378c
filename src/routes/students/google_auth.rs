use axum::{Extension, Json};
use axum_extra::extract::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::GoogleLoginError},
    services::{
        database::{student::StudentSummary, DatabaseLayer},
        google::GoogleAuthLayer,
    },
    setup::Config,
    utils::{
        cookies::{google_token_cookie, session_cookie},
        jwt::sign_session_token,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1, message = "An ID token is required"))]
    token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    student: StudentSummary,
}

/// Splits a display name into first and last parts. Everything after the
/// first space lands in the last name.
fn split_display_name(name: Option<&str>) -> (Option<String>, Option<String>) {
    match name {
        Some(name) => match name.split_once(' ') {
            Some((first, rest)) => (Some(String::from(first)), Some(String::from(rest))),
            None => (Some(String::from(name)), None),
        },
        None => (None, None),
    }
}

#[axum::debug_handler]
pub async fn google_auth(
    Extension(config): Extension<Config>,
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(google_auth_layer): Extension<GoogleAuthLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(CookieJar, (StatusCode, Json<RouteOutput>)), ApiError<GoogleLoginError>> {
    // 1. Validate payload input
    payload.validate()?;

    // 2. Verify the ID token with Google
    let identity = google_auth_layer.verify_id_token(&payload.token).await?;

    let email = identity.email.to_lowercase();

    // 3. Look up the account or auto-provision one from the identity
    let existing = database_layer
        .query()
        .student
        .get_by_email(email.clone())
        .await?;

    let student = match existing {
        Some(student) => student,
        None => {
            let (first_name, last_name) = split_display_name(identity.name.as_deref());

            database_layer
                .query()
                .student
                .create_from_google(
                    email,
                    identity.subject_id,
                    first_name,
                    last_name,
                    identity.picture,
                )
                .await?
                .ok_or(ApiError(GoogleLoginError::CreationFailed))?
        }
    };

    // 4. Mint the longer-lived OAuth session and set both cookies
    let ttl_days = config.oauth_session_ttl_days;

    let token = sign_session_token(&student.key(), &config.jwt_secret, ttl_days)?;

    let jar = jar
        .add(session_cookie(token, ttl_days))
        .add(google_token_cookie(payload.token, ttl_days));

    tracing::debug!(student_id = %student.key(), "google login");

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RouteOutput {
                success: true,
                message: String::from("Login successful with Google"),
                student: StudentSummary::from(student),
            }),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::split_display_name;

    #[test]
    fn two_part_name_splits_on_the_first_space() {
        let (first, last) = split_display_name(Some("Ada Obi"));

        assert_eq!(first.as_deref(), Some("Ada"));
        assert_eq!(last.as_deref(), Some("Obi"));
    }

    #[test]
    fn extra_parts_stay_in_the_last_name() {
        let (first, last) = split_display_name(Some("Ada Ngozi Obi"));

        assert_eq!(first.as_deref(), Some("Ada"));
        assert_eq!(last.as_deref(), Some("Ngozi Obi"));
    }

    #[test]
    fn single_part_name_has_no_last_name() {
        let (first, last) = split_display_name(Some("Ada"));

        assert_eq!(first.as_deref(), Some("Ada"));
        assert_eq!(last, None);
    }

    #[test]
    fn missing_name_yields_neither() {
        assert_eq!(split_display_name(None), (None, None));
    }
}
