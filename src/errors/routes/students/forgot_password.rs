use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum ForgotPasswordError {
    Common(CommonError),
    NotFound,
    InvalidCode,
    ExpiredCode,
}

impl ErrorResponse for ForgotPasswordError {
    fn error_name(&self) -> &str {
        match self {
            ForgotPasswordError::Common(e) => e.error_name(),
            ForgotPasswordError::NotFound => "Student Not Found",
            ForgotPasswordError::InvalidCode => "Invalid OTP",
            ForgotPasswordError::ExpiredCode => "Expired OTP",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            ForgotPasswordError::Common(e) => e.error_message(),
            ForgotPasswordError::NotFound => json!("No account found with this email"),
            ForgotPasswordError::InvalidCode => json!("The provided OTP is invalid"),
            ForgotPasswordError::ExpiredCode => {
                json!("The OTP has expired. Request a new one and try again")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ForgotPasswordError::Common(e) => e.status_code(),
            ForgotPasswordError::NotFound => StatusCode::NOT_FOUND,
            ForgotPasswordError::InvalidCode => StatusCode::BAD_REQUEST,
            ForgotPasswordError::ExpiredCode => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<CommonError> for ForgotPasswordError {
    fn from(error: CommonError) -> Self {
        ForgotPasswordError::Common(error)
    }
}

impl From<ForgotPasswordError> for ApiError<ForgotPasswordError> {
    fn from(error: ForgotPasswordError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<ForgotPasswordError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(ForgotPasswordError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<ForgotPasswordError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(ForgotPasswordError::Common(CommonError::Database(error)))
    }
}

impl From<argon2::password_hash::Error> for ApiError<ForgotPasswordError> {
    fn from(error: argon2::password_hash::Error) -> Self {
        ApiError(ForgotPasswordError::Common(CommonError::Hashing(error)))
    }
}
