use axum::{Extension, Json};
use chrono::{Duration, Utc};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::SendForgotPasswordOtpError},
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
pub async fn send_forgot_password_otp(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SendForgotPasswordOtpError>> {
    // 1. Validate payload input
    payload.validate()?;

    let email = payload.email.to_lowercase();

    // 2. Look up the account
    let student = database_layer
        .query()
        .student
        .get_by_email(email)
        .await?
        .ok_or(ApiError(SendForgotPasswordOtpError::NotFound))?;

    // 3. Issue a reset code, replacing any earlier one
    let otp = generate_otp();
    let expires_at = Datetime::from(Utc::now() + Duration::minutes(OTP_TTL_MINUTES));

    database_layer
        .query()
        .student
        .set_forgot_password_otp(student.key(), otp.clone(), expires_at)
        .await?
        .ok_or(ApiError(SendForgotPasswordOtpError::NotFound))?;

    // 4. Deliver it
    email_layer
        .send_forgot_password_otp(student.email, otp)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Password reset OTP sent. Check your email."),
        }),
    ))
}
