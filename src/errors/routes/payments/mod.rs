mod initiate_payment;
mod verify_payment;

pub use initiate_payment::InitiatePaymentError;
pub use verify_payment::VerifyPaymentError;
