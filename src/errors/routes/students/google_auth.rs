use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::services::google::GoogleAuthError;

#[derive(Debug, Display)]
pub enum GoogleLoginError {
    Common(CommonError),
    InvalidToken,
    Upstream,
    CreationFailed,
}

impl ErrorResponse for GoogleLoginError {
    fn error_name(&self) -> &str {
        match self {
            GoogleLoginError::Common(e) => e.error_name(),
            GoogleLoginError::InvalidToken => "Invalid Token",
            GoogleLoginError::Upstream => "Upstream Error",
            GoogleLoginError::CreationFailed => "Account Creation Failed",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            GoogleLoginError::Common(e) => e.error_message(),
            GoogleLoginError::InvalidToken => json!("Google authentication failed"),
            GoogleLoginError::Upstream => {
                json!("Could not reach Google to verify the token")
            }
            GoogleLoginError::CreationFailed => json!("The account could not be created"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GoogleLoginError::Common(e) => e.status_code(),
            GoogleLoginError::InvalidToken => StatusCode::UNAUTHORIZED,
            GoogleLoginError::Upstream => StatusCode::BAD_GATEWAY,
            GoogleLoginError::CreationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CommonError> for GoogleLoginError {
    fn from(error: CommonError) -> Self {
        GoogleLoginError::Common(error)
    }
}

impl From<GoogleLoginError> for ApiError<GoogleLoginError> {
    fn from(error: GoogleLoginError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<GoogleAuthError> for ApiError<GoogleLoginError> {
    fn from(error: GoogleAuthError) -> Self {
        match error {
            GoogleAuthError::Transport(_) => ApiError(GoogleLoginError::Upstream),
            GoogleAuthError::InvalidToken => ApiError(GoogleLoginError::InvalidToken),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError<GoogleLoginError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(GoogleLoginError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<GoogleLoginError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(GoogleLoginError::Common(CommonError::Database(error)))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError<GoogleLoginError> {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        ApiError(GoogleLoginError::Common(CommonError::Token(error)))
    }
}
