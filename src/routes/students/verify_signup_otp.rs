use axum::{Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::VerifySignupOtpError},
    services::database::{student::StudentSummary, DatabaseLayer},
    utils::{
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
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    student: StudentSummary,
}

#[axum::debug_handler]
pub async fn verify_signup_otp(
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<VerifySignupOtpError>> {
    // 1. Validate payload input
    payload.validate()?;

    let email = payload.email.to_lowercase();

    // 2. Look up the account
    let student = database_layer
        .query()
        .student
        .get_by_email(email)
        .await?
        .ok_or(ApiError(VerifySignupOtpError::NotFound))?;

    // 3. Check the submitted code against the stored pair
    let check = check_otp(
        student.signup_otp.as_deref(),
        student.signup_otp_expiry(),
        &payload.otp,
        Utc::now(),
    );

    match check {
        OtpCheck::Valid => {}
        OtpCheck::Invalid => return Err(ApiError(VerifySignupOtpError::InvalidCode)),
        OtpCheck::Expired => return Err(ApiError(VerifySignupOtpError::ExpiredCode)),
    }

    // 4. Flip the flag and consume the code in one guarded update. No
    // row back means a concurrent submission consumed the code first.
    let student = database_layer
        .query()
        .student
        .consume_signup_otp(student.key(), payload.otp.clone())
        .await?
        .ok_or(ApiError(VerifySignupOtpError::InvalidCode))?;

    tracing::debug!(student_id = %student.key(), "email verified");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Email verified successfully"),
            student: StudentSummary::from(student),
        }),
    ))
}
