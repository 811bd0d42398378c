pub mod initiate_payment;
pub mod verify_payment;

use axum::{
    routing::{get, post},
    Router,
};

pub use initiate_payment::initiate_payment;
pub use verify_payment::verify_payment;

pub fn payments_router() -> Router {
    Router::new()
        .route("/initiate-payment", post(initiate_payment))
        .route("/verify/:transaction_id", get(verify_payment))
}
