use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum LoginError {
    Common(CommonError),
    NotFound,
    NotPasswordRegistered,
    InvalidCredentials,
}

impl ErrorResponse for LoginError {
    fn error_name(&self) -> &str {
        match self {
            LoginError::Common(e) => e.error_name(),
            LoginError::NotFound => "Student Not Found",
            LoginError::NotPasswordRegistered => "Not Password Registered",
            LoginError::InvalidCredentials => "Invalid Credentials",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            LoginError::Common(e) => e.error_message(),
            LoginError::NotFound => json!("No account found with this email"),
            LoginError::NotPasswordRegistered => {
                json!("This account has no password. Login with Google or complete registration")
            }
            LoginError::InvalidCredentials => json!("The provided credentials are invalid"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LoginError::Common(e) => e.status_code(),
            LoginError::NotFound => StatusCode::NOT_FOUND,
            LoginError::NotPasswordRegistered => StatusCode::UNAUTHORIZED,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<CommonError> for LoginError {
    fn from(error: CommonError) -> Self {
        LoginError::Common(error)
    }
}

impl From<LoginError> for ApiError<LoginError> {
    fn from(error: LoginError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<LoginError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(LoginError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<LoginError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Database(error)))
    }
}

impl From<argon2::password_hash::Error> for ApiError<LoginError> {
    fn from(error: argon2::password_hash::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Hashing(error)))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError<LoginError> {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        ApiError(LoginError::Common(CommonError::Token(error)))
    }
}
