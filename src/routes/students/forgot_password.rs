use axum::{Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::ForgotPasswordError},
    services::database::DatabaseLayer,
    utils::{
        crypto::hash_password,
        otp::{check_otp, OtpCheck},
        validation::validate_otp_format,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(
        length(equal = 6, message = "The OTP must be exactly 6 digits long"),
        custom(function = "validate_otp_format")
    )]
    otp: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
}

#[axum::debug_handler]
pub async fn forgot_password(
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<ForgotPasswordError>> {
    // 1. Validate payload input
    payload.validate()?;

    let email = payload.email.to_lowercase();

    // 2. Look up the account
    let student = database_layer
        .query()
        .student
        .get_by_email(email)
        .await?
        .ok_or(ApiError(ForgotPasswordError::NotFound))?;

    // 3. Check the submitted code against the stored reset pair
    let check = check_otp(
        student.forgot_password_otp.as_deref(),
        student.forgot_password_otp_expiry(),
        &payload.otp,
        Utc::now(),
    );

    match check {
        OtpCheck::Valid => {}
        OtpCheck::Invalid => return Err(ApiError(ForgotPasswordError::InvalidCode)),
        OtpCheck::Expired => return Err(ApiError(ForgotPasswordError::ExpiredCode)),
    }

    // 4. Store the new hash and consume the code in one guarded update.
    // No row back means a concurrent submission consumed the code first.
    let password_hash = hash_password(payload.new_password.clone()).await?;

    database_layer
        .query()
        .student
        .reset_password(student.key(), password_hash, payload.otp.clone())
        .await?
        .ok_or(ApiError(ForgotPasswordError::InvalidCode))?;

    tracing::debug!(student_id = %student.key(), "password reset");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Password reset successfully"),
        }),
    ))
}
