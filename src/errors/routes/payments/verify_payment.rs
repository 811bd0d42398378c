use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::services::payment::PaymentError;

#[derive(Debug, Display)]
pub enum VerifyPaymentError {
    Common(CommonError),
    NotFound,
    Gateway,
    VerificationFailed,
}

impl ErrorResponse for VerifyPaymentError {
    fn error_name(&self) -> &str {
        match self {
            VerifyPaymentError::Common(e) => e.error_name(),
            VerifyPaymentError::NotFound => "Student Not Found",
            VerifyPaymentError::Gateway => "Gateway Error",
            VerifyPaymentError::VerificationFailed => "Verification Failed",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            VerifyPaymentError::Common(e) => e.error_message(),
            VerifyPaymentError::NotFound => json!("Student not found"),
            VerifyPaymentError::Gateway => {
                json!("The payment gateway could not be reached")
            }
            VerifyPaymentError::VerificationFailed => json!("Payment verification failed"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            VerifyPaymentError::Common(e) => e.status_code(),
            VerifyPaymentError::NotFound => StatusCode::NOT_FOUND,
            VerifyPaymentError::Gateway => StatusCode::BAD_GATEWAY,
            VerifyPaymentError::VerificationFailed => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for VerifyPaymentError {
    fn from(error: CommonError) -> Self {
        VerifyPaymentError::Common(error)
    }
}

impl From<VerifyPaymentError> for ApiError<VerifyPaymentError> {
    fn from(error: VerifyPaymentError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<PaymentError> for ApiError<VerifyPaymentError> {
    fn from(_error: PaymentError) -> Self {
        ApiError(VerifyPaymentError::Gateway)
    }
}

impl From<surrealdb::Error> for ApiError<VerifyPaymentError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(VerifyPaymentError::Common(CommonError::Database(error)))
    }
}
