use axum::{Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::payments::InitiatePaymentError},
    extractors::AuthStudent,
    services::{
        database::DatabaseLayer,
        payment::{
            payment_reference, ChargeCustomer, ChargeCustomizations, ChargeRequest, PaymentLayer,
        },
    },
    setup::Config,
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(length(min = 1, message = "An amount is required"))]
    amount: String,
    #[validate(length(min = 1, message = "A payment method is required"))]
    payment_method: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    payment_link: String,
}

#[axum::debug_handler]
pub async fn initiate_payment(
    auth: AuthStudent,
    Extension(config): Extension<Config>,
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(payment_layer): Extension<PaymentLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<InitiatePaymentError>> {
    // 1. Validate payload input
    payload.validate()?;

    // 2. The session must belong to a live account
    database_layer
        .query()
        .student
        .get(auth.student_id.clone())
        .await?
        .ok_or(ApiError(InitiatePaymentError::NotFound))?;

    // 3. Hand the charge to the gateway
    let charge = ChargeRequest {
        tx_ref: payment_reference(),
        amount: payload.amount.clone(),
        currency: String::from("NGN"),
        redirect_url: format!("{}/payment-success", config.frontend_url),
        customer: ChargeCustomer {
            email: payload.email.to_lowercase(),
        },
        payment_options: payload.payment_method.clone(),
        customizations: ChargeCustomizations {
            title: String::from("Access2edu Subscription"),
            description: String::from("Subscription payment for Access2edu"),
        },
    };

    let response = payment_layer.initiate_charge(charge).await?;

    // A declined charge carries the gateway's own message.
    let payment_link = response.payment_link().ok_or_else(|| {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| String::from("Payment initiation failed"));

        ApiError(InitiatePaymentError::InitiationFailed(message))
    })?;

    tracing::debug!(student_id = %auth.student_id, "payment initiated");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Payment initiated"),
            payment_link,
        }),
    ))
}
