use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum VerifySignupOtpError {
    Common(CommonError),
    NotFound,
    InvalidCode,
    ExpiredCode,
}

impl ErrorResponse for VerifySignupOtpError {
    fn error_name(&self) -> &str {
        match self {
            VerifySignupOtpError::Common(e) => e.error_name(),
            VerifySignupOtpError::NotFound => "Student Not Found",
            VerifySignupOtpError::InvalidCode => "Invalid OTP",
            VerifySignupOtpError::ExpiredCode => "Expired OTP",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            VerifySignupOtpError::Common(e) => e.error_message(),
            VerifySignupOtpError::NotFound => json!("No account found with this email"),
            VerifySignupOtpError::InvalidCode => json!("The provided OTP is invalid"),
            VerifySignupOtpError::ExpiredCode => {
                json!("The OTP has expired. Request a new one and try again")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            VerifySignupOtpError::Common(e) => e.status_code(),
            VerifySignupOtpError::NotFound => StatusCode::NOT_FOUND,
            VerifySignupOtpError::InvalidCode => StatusCode::BAD_REQUEST,
            VerifySignupOtpError::ExpiredCode => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<CommonError> for VerifySignupOtpError {
    fn from(error: CommonError) -> Self {
        VerifySignupOtpError::Common(error)
    }
}

impl From<VerifySignupOtpError> for ApiError<VerifySignupOtpError> {
    fn from(error: VerifySignupOtpError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<VerifySignupOtpError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(VerifySignupOtpError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<VerifySignupOtpError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(VerifySignupOtpError::Common(CommonError::Database(error)))
    }
}
