use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::services::payment::PaymentError;

#[derive(Debug, Display)]
pub enum InitiatePaymentError {
    Common(CommonError),
    NotFound,
    Gateway,
    InitiationFailed(String),
}

impl ErrorResponse for InitiatePaymentError {
    fn error_name(&self) -> &str {
        match self {
            InitiatePaymentError::Common(e) => e.error_name(),
            InitiatePaymentError::NotFound => "Student Not Found",
            InitiatePaymentError::Gateway => "Gateway Error",
            InitiatePaymentError::InitiationFailed(_) => "Payment Failed",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            InitiatePaymentError::Common(e) => e.error_message(),
            InitiatePaymentError::NotFound => json!("Student not found"),
            InitiatePaymentError::Gateway => {
                json!("The payment gateway could not be reached")
            }
            InitiatePaymentError::InitiationFailed(message) => json!(message),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            InitiatePaymentError::Common(e) => e.status_code(),
            InitiatePaymentError::NotFound => StatusCode::NOT_FOUND,
            InitiatePaymentError::Gateway => StatusCode::BAD_GATEWAY,
            InitiatePaymentError::InitiationFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for InitiatePaymentError {
    fn from(error: CommonError) -> Self {
        InitiatePaymentError::Common(error)
    }
}

impl From<InitiatePaymentError> for ApiError<InitiatePaymentError> {
    fn from(error: InitiatePaymentError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<PaymentError> for ApiError<InitiatePaymentError> {
    fn from(_error: PaymentError) -> Self {
        ApiError(InitiatePaymentError::Gateway)
    }
}

impl From<validator::ValidationErrors> for ApiError<InitiatePaymentError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(InitiatePaymentError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<InitiatePaymentError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(InitiatePaymentError::Common(CommonError::Database(error)))
    }
}
