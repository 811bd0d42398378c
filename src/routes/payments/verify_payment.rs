use axum::{extract::Path, Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, routes::payments::VerifyPaymentError},
    extractors::AuthStudent,
    services::{database::DatabaseLayer, payment::PaymentLayer},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
}

#[axum::debug_handler]
pub async fn verify_payment(
    auth: AuthStudent,
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(payment_layer): Extension<PaymentLayer>,
    Path(transaction_id): Path<String>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<VerifyPaymentError>> {
    // 1. Ask the gateway about the transaction
    let response = payment_layer.verify_transaction(transaction_id).await?;

    if !response.is_confirmed() {
        return Err(ApiError(VerifyPaymentError::VerificationFailed));
    }

    // 2. Unlock the account only after the gateway confirms
    database_layer
        .query()
        .student
        .mark_paid(auth.student_id.clone())
        .await?
        .ok_or(ApiError(VerifyPaymentError::NotFound))?;

    tracing::debug!(student_id = %auth.student_id, "payment confirmed");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Payment successful! You can now access videos."),
        }),
    ))
}
