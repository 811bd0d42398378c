use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum DeleteStudentError {
    Common(CommonError),
    NotFound,
    Forbidden,
}

impl ErrorResponse for DeleteStudentError {
    fn error_name(&self) -> &str {
        match self {
            DeleteStudentError::Common(e) => e.error_name(),
            DeleteStudentError::NotFound => "Student Not Found",
            DeleteStudentError::Forbidden => "Forbidden",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            DeleteStudentError::Common(e) => e.error_message(),
            DeleteStudentError::NotFound => json!("Student not found"),
            DeleteStudentError::Forbidden => json!("You can only delete your own account"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DeleteStudentError::Common(e) => e.status_code(),
            DeleteStudentError::NotFound => StatusCode::NOT_FOUND,
            DeleteStudentError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl From<CommonError> for DeleteStudentError {
    fn from(error: CommonError) -> Self {
        DeleteStudentError::Common(error)
    }
}

impl From<DeleteStudentError> for ApiError<DeleteStudentError> {
    fn from(error: DeleteStudentError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<surrealdb::Error> for ApiError<DeleteStudentError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(DeleteStudentError::Common(CommonError::Database(error)))
    }
}
