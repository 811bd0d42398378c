use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum UpdateStudentError {
    Common(CommonError),
    NotFound,
    Forbidden,
}

impl ErrorResponse for UpdateStudentError {
    fn error_name(&self) -> &str {
        match self {
            UpdateStudentError::Common(e) => e.error_name(),
            UpdateStudentError::NotFound => "Student Not Found",
            UpdateStudentError::Forbidden => "Forbidden",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            UpdateStudentError::Common(e) => e.error_message(),
            UpdateStudentError::NotFound => json!("Student not found"),
            UpdateStudentError::Forbidden => json!("You can only update your own account"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            UpdateStudentError::Common(e) => e.status_code(),
            UpdateStudentError::NotFound => StatusCode::NOT_FOUND,
            UpdateStudentError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl From<CommonError> for UpdateStudentError {
    fn from(error: CommonError) -> Self {
        UpdateStudentError::Common(error)
    }
}

impl From<UpdateStudentError> for ApiError<UpdateStudentError> {
    fn from(error: UpdateStudentError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<UpdateStudentError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(UpdateStudentError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<UpdateStudentError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(UpdateStudentError::Common(CommonError::Database(error)))
    }
}
