use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, ErrorResponse};

/// Rejection of the session extractor: the request reached a protected
/// route without a usable session cookie.
#[derive(Debug, Display)]
pub enum SessionError {
    NotLoggedIn,
    InvalidSession,
    MissingConfig,
}

impl ErrorResponse for SessionError {
    fn error_name(&self) -> &str {
        match self {
            SessionError::NotLoggedIn => "Not Logged In",
            SessionError::InvalidSession => "Invalid Session",
            SessionError::MissingConfig => "Server Misconfiguration",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            SessionError::NotLoggedIn => json!("Please login to continue"),
            SessionError::InvalidSession => json!("The session is invalid or has expired"),
            SessionError::MissingConfig => json!("The server is not configured for sessions"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SessionError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            SessionError::InvalidSession => StatusCode::UNAUTHORIZED,
            SessionError::MissingConfig => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SessionError> for ApiError<SessionError> {
    fn from(error: SessionError) -> Self {
        ApiError(error)
    }
}
