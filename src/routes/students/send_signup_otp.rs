use axum::{Extension, Json};
use chrono::{Duration, Utc};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::SendSignupOtpError},
    services::{database::DatabaseLayer, email::EmailLayer},
    utils::{otp::OTP_TTL_MINUTES, random::generate_otp},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email(message = "A valid email is required"))]
    email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
}

#[axum::debug_handler]
pub async fn send_signup_otp(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SendSignupOtpError>> {
    // 1. Validate payload input
    payload.validate()?;

    let email = payload.email.to_lowercase();

    // 2. Look up the account
    let student = database_layer
        .query()
        .student
        .get_by_email(email)
        .await?
        .ok_or(ApiError(SendSignupOtpError::NotFound))?;

    if student.is_verified {
        return Err(ApiError(SendSignupOtpError::AlreadyVerified));
    }

    // 3. Issue a fresh code, replacing any earlier one
    let otp = generate_otp();
    let expires_at = Datetime::from(Utc::now() + Duration::minutes(OTP_TTL_MINUTES));

    database_layer
        .query()
        .student
        .set_signup_otp(student.key(), otp.clone(), expires_at)
        .await?
        .ok_or(ApiError(SendSignupOtpError::NotFound))?;

    // 4. Deliver it
    let first_name = student.first_name.clone().unwrap_or_default();

    email_layer
        .send_signup_otp(student.email, first_name, otp)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("OTP sent successfully. Check your email."),
        }),
    ))
}
