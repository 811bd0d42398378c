use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum SendSignupOtpError {
    Common(CommonError),
    NotFound,
    AlreadyVerified,
}

impl ErrorResponse for SendSignupOtpError {
    fn error_name(&self) -> &str {
        match self {
            SendSignupOtpError::Common(e) => e.error_name(),
            SendSignupOtpError::NotFound => "Student Not Found",
            SendSignupOtpError::AlreadyVerified => "Already Verified",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            SendSignupOtpError::Common(e) => e.error_message(),
            SendSignupOtpError::NotFound => json!("No account found with this email"),
            SendSignupOtpError::AlreadyVerified => json!("The account is already verified"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SendSignupOtpError::Common(e) => e.status_code(),
            SendSignupOtpError::NotFound => StatusCode::NOT_FOUND,
            SendSignupOtpError::AlreadyVerified => StatusCode::CONFLICT,
        }
    }
}

impl From<CommonError> for SendSignupOtpError {
    fn from(error: CommonError) -> Self {
        SendSignupOtpError::Common(error)
    }
}

impl From<SendSignupOtpError> for ApiError<SendSignupOtpError> {
    fn from(error: SendSignupOtpError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<SendSignupOtpError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(SendSignupOtpError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<SendSignupOtpError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(SendSignupOtpError::Common(CommonError::Database(error)))
    }
}

impl From<resend_rs::Error> for ApiError<SendSignupOtpError> {
    fn from(error: resend_rs::Error) -> Self {
        ApiError(SendSignupOtpError::Common(CommonError::Email(error)))
    }
}
