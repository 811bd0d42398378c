use crate::services::payment::PaymentLayer;
use crate::setup::Config;

pub fn setup_payment_service(config: &Config) -> PaymentLayer {
    PaymentLayer::new(
        config.flutterwave_secret_key.clone(),
        config.flutterwave_base_url.clone(),
    )
    .expect("failed to build the payment gateway HTTP client")
}
