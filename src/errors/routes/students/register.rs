use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum RegisterError {
    Common(CommonError),
    PasswordMismatch,
    AlreadyRegistered,
    CreationFailed,
    /// The account record is durable at this point; only the OTP email
    /// failed. Surfaced separately so the caller knows a retry goes
    /// through send-signup-otp, not register.
    OtpEmailFailed,
}

impl ErrorResponse for RegisterError {
    fn error_name(&self) -> &str {
        match self {
            RegisterError::Common(e) => e.error_name(),
            RegisterError::PasswordMismatch => "Password Mismatch",
            RegisterError::AlreadyRegistered => "Already Registered",
            RegisterError::CreationFailed => "Creation Failed",
            RegisterError::OtpEmailFailed => "OTP Email Failed",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            RegisterError::Common(e) => e.error_message(),
            RegisterError::PasswordMismatch => json!("Passwords do not match"),
            RegisterError::AlreadyRegistered => {
                json!("Student already registered. Please login")
            }
            RegisterError::CreationFailed => json!("Account not created. Please try again"),
            RegisterError::OtpEmailFailed => json!(
                "The account was created but the verification email could not be sent. Request a new OTP to verify your email."
            ),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            RegisterError::Common(e) => e.status_code(),
            RegisterError::PasswordMismatch => StatusCode::BAD_REQUEST,
            RegisterError::AlreadyRegistered => StatusCode::CONFLICT,
            RegisterError::CreationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            RegisterError::OtpEmailFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CommonError> for RegisterError {
    fn from(error: CommonError) -> Self {
        RegisterError::Common(error)
    }
}

impl From<RegisterError> for ApiError<RegisterError> {
    fn from(error: RegisterError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<RegisterError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(RegisterError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<RegisterError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(RegisterError::Common(CommonError::Database(error)))
    }
}

impl From<argon2::password_hash::Error> for ApiError<RegisterError> {
    fn from(error: argon2::password_hash::Error) -> Self {
        ApiError(RegisterError::Common(CommonError::Hashing(error)))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError<RegisterError> {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        ApiError(RegisterError::Common(CommonError::Token(error)))
    }
}
