use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum SendForgotPasswordOtpError {
    Common(CommonError),
    NotFound,
}

impl ErrorResponse for SendForgotPasswordOtpError {
    fn error_name(&self) -> &str {
        match self {
            SendForgotPasswordOtpError::Common(e) => e.error_name(),
            SendForgotPasswordOtpError::NotFound => "Student Not Found",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            SendForgotPasswordOtpError::Common(e) => e.error_message(),
            SendForgotPasswordOtpError::NotFound => json!("No account found with this email"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SendForgotPasswordOtpError::Common(e) => e.status_code(),
            SendForgotPasswordOtpError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CommonError> for SendForgotPasswordOtpError {
    fn from(error: CommonError) -> Self {
        SendForgotPasswordOtpError::Common(error)
    }
}

impl From<SendForgotPasswordOtpError> for ApiError<SendForgotPasswordOtpError> {
    fn from(error: SendForgotPasswordOtpError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<SendForgotPasswordOtpError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(SendForgotPasswordOtpError::Common(CommonError::Validation(
            error,
        )))
    }
}

impl From<surrealdb::Error> for ApiError<SendForgotPasswordOtpError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(SendForgotPasswordOtpError::Common(CommonError::Database(
            error,
        )))
    }
}

impl From<resend_rs::Error> for ApiError<SendForgotPasswordOtpError> {
    fn from(error: resend_rs::Error) -> Self {
        ApiError(SendForgotPasswordOtpError::Common(CommonError::Email(error)))
    }
}
