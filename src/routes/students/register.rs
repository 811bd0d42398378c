use axum::{Extension, Json};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::RegisterError},
    services::{
        database::{
            student::{Student, StudentProfile, StudentSummary},
            subject::SubjectQuery,
            DatabaseLayer,
        },
        email::EmailLayer,
    },
    setup::Config,
    utils::{
        cookies::session_cookie,
        crypto::hash_password,
        jwt::sign_session_token,
        otp::OTP_TTL_MINUTES,
        random::generate_otp,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1, message = "First name is required"))]
    first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    last_name: String,
    other_name: Option<String>,
    #[validate(length(min = 1, message = "Level is required"))]
    level: String,
    #[validate(length(min = 1, message = "Parent or guardian is required"))]
    parent_guardian: String,
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
    confirm_password: String,
    profile_picture: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    student: StudentSummary,
}

#[derive(Debug, PartialEq)]
enum RegistrationPath {
    /// The email already belongs to a password-holding account.
    Conflict,
    /// A shell or Google-only account exists; complete it in place.
    Complete(String),
    /// No account yet; create one first.
    CreateShell,
}

fn registration_path(existing: Option<&Student>) -> RegistrationPath {
    match existing {
        Some(student) if student.password_hash.is_some() => RegistrationPath::Conflict,
        Some(student) => RegistrationPath::Complete(student.key()),
        None => RegistrationPath::CreateShell,
    }
}

#[axum::debug_handler]
pub async fn register(
    Extension(config): Extension<Config>,
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(CookieJar, (StatusCode, Json<RouteOutput>)), ApiError<RegisterError>> {
    // 1. Validate payload input
    payload.validate()?;

    if payload.password != payload.confirm_password {
        return Err(ApiError(RegisterError::PasswordMismatch));
    }

    let email = payload.email.to_lowercase();

    // 2. Decide what the existing account state means for this email
    let existing = database_layer
        .query()
        .student
        .get_by_email(email.clone())
        .await?;

    let student_id = match registration_path(existing.as_ref()) {
        RegistrationPath::Conflict => return Err(ApiError(RegisterError::AlreadyRegistered)),
        RegistrationPath::Complete(key) => key,
        RegistrationPath::CreateShell => database_layer
            .query()
            .student
            .create_shell(email.clone())
            .await?
            .ok_or(ApiError(RegisterError::CreationFailed))?
            .key(),
    };

    // 3. Link every subject offered for the declared level
    let subjects = database_layer
        .query()
        .subject
        .find_by_class_name(payload.level.clone())
        .await?;

    let subject_ids = SubjectQuery::ids(&subjects);

    // 4. Hash credentials and issue the signup OTP
    let password_hash = hash_password(payload.password.clone()).await?;

    let otp = generate_otp();
    let expires_at = Datetime::from(Utc::now() + Duration::minutes(OTP_TTL_MINUTES));

    let profile = StudentProfile {
        first_name: Some(payload.first_name.clone()),
        last_name: Some(payload.last_name.clone()),
        other_name: payload.other_name.clone(),
        level: Some(payload.level.clone()),
        parent_guardian: Some(payload.parent_guardian.clone()),
        profile_picture: payload.profile_picture.clone(),
    };

    let student = database_layer
        .query()
        .student
        .complete_registration(
            student_id.clone(),
            profile,
            password_hash,
            subject_ids,
            otp.clone(),
            expires_at,
        )
        .await?
        .ok_or(ApiError(RegisterError::CreationFailed))?;

    tracing::debug!(student_id = %student_id, "student registered");

    // 5. Send the OTP email. The account record is already durable, so a
    // failed send leaves a retriable state behind.
    if let Err(error) = email_layer
        .send_signup_otp(student.email.clone(), payload.first_name.clone(), otp)
        .await
    {
        tracing::warn!(error = %error, "signup OTP email failed");
        return Err(ApiError(RegisterError::OtpEmailFailed));
    }

    // 6. Mint the session and set the cookie
    let token = sign_session_token(&student_id, &config.jwt_secret, config.session_ttl_days)?;
    let jar = jar.add(session_cookie(token, config.session_ttl_days));

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(RouteOutput {
                success: true,
                message: String::from(
                    "Account created successfully. Check your email for the verification OTP.",
                ),
                student: StudentSummary::from(student),
            }),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use surrealdb::sql::{Datetime, Thing};

    use super::*;

    fn account(key: &str, password_hash: Option<&str>) -> Student {
        Student {
            id: Thing::from(("student", key)),
            email: String::from("ada@example.com"),
            password_hash: password_hash.map(String::from),
            google_id: None,
            first_name: Some(String::from("Ada")),
            last_name: Some(String::from("Obi")),
            other_name: None,
            level: Some(String::from("jss1")),
            parent_guardian: Some(String::from("Ngozi Obi")),
            profile_picture: None,
            is_verified: false,
            has_paid: false,
            signup_otp: None,
            signup_otp_expires_at: None,
            forgot_password_otp: None,
            forgot_password_otp_expires_at: None,
            subjects: Vec::new(),
            created_at: Datetime::from(Utc::now()),
        }
    }

    #[test]
    fn password_bearing_account_conflicts() {
        let existing = account("abc123", Some("$argon2id$stub"));

        assert_eq!(
            registration_path(Some(&existing)),
            RegistrationPath::Conflict
        );
    }

    #[test]
    fn passwordless_account_is_completed_in_place() {
        let existing = account("abc123", None);

        assert_eq!(
            registration_path(Some(&existing)),
            RegistrationPath::Complete(String::from("abc123"))
        );
    }

    #[test]
    fn unknown_email_creates_a_fresh_account() {
        assert_eq!(registration_path(None), RegistrationPath::CreateShell);
    }
}
