use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum FetchSubjectsError {
    Common(CommonError),
    NotFound,
    NoMoreResults,
    InvalidPagination,
}

impl ErrorResponse for FetchSubjectsError {
    fn error_name(&self) -> &str {
        match self {
            FetchSubjectsError::Common(e) => e.error_name(),
            FetchSubjectsError::NotFound => "Student Not Found",
            FetchSubjectsError::NoMoreResults => "No More Results",
            FetchSubjectsError::InvalidPagination => "Invalid Pagination",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            FetchSubjectsError::Common(e) => e.error_message(),
            FetchSubjectsError::NotFound => json!("Student not found"),
            FetchSubjectsError::NoMoreResults => json!("No more page available"),
            FetchSubjectsError::InvalidPagination => {
                json!("Page and limit must both be at least 1")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FetchSubjectsError::Common(e) => e.status_code(),
            FetchSubjectsError::NotFound => StatusCode::NOT_FOUND,
            FetchSubjectsError::NoMoreResults => StatusCode::NOT_FOUND,
            FetchSubjectsError::InvalidPagination => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for FetchSubjectsError {
    fn from(error: CommonError) -> Self {
        FetchSubjectsError::Common(error)
    }
}

impl From<FetchSubjectsError> for ApiError<FetchSubjectsError> {
    fn from(error: FetchSubjectsError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<surrealdb::Error> for ApiError<FetchSubjectsError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(FetchSubjectsError::Common(CommonError::Database(error)))
    }
}
