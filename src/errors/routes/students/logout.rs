use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, ErrorResponse};

#[derive(Debug, Display)]
pub enum LogoutError {
    NotLoggedIn,
}

impl ErrorResponse for LogoutError {
    fn error_name(&self) -> &str {
        match self {
            LogoutError::NotLoggedIn => "Not Logged In",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            LogoutError::NotLoggedIn => json!("You are not logged in"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LogoutError::NotLoggedIn => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<LogoutError> for ApiError<LogoutError> {
    fn from(error: LogoutError) -> Self {
        ApiError(error)
    }
}
