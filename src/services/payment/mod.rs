use std::time::Duration;

use chrono::Utc;
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.flutterwave.com/v3";

/// Every gateway call carries its own timeout, independent of the client
/// connection that triggered it.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Display)]
pub enum PaymentError {
    Transport(reqwest::Error),
    Gateway(String),
}

impl From<reqwest::Error> for PaymentError {
    fn from(error: reqwest::Error) -> Self {
        PaymentError::Transport(error)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ChargeCustomer {
    pub email: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChargeCustomizations {
    pub title: String,
    pub description: String,
}

/// Charge-initiation payload for the gateway's hosted payment page.
#[derive(Serialize, Debug, Clone)]
pub struct ChargeRequest {
    pub tx_ref: String,
    pub amount: String,
    pub currency: String,
    pub redirect_url: String,
    pub customer: ChargeCustomer,
    pub payment_options: String,
    pub customizations: ChargeCustomizations,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChargeData {
    pub link: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChargeResponse {
    pub status: String,
    pub message: Option<String>,
    pub data: Option<ChargeData>,
}

impl ChargeResponse {
    /// The hosted-payment-page URL, present only when the gateway
    /// accepted the charge.
    pub fn payment_link(&self) -> Option<String> {
        if self.status != "success" {
            return None;
        }

        self.data.as_ref().and_then(|data| data.link.clone())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct VerifyData {
    pub status: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VerifyResponse {
    pub status: String,
    pub data: Option<VerifyData>,
}

impl VerifyResponse {
    /// A transaction counts as confirmed only for the exact combination
    /// of an overall "success" and a "successful" transaction status.
    /// Anything else leaves the account untouched.
    pub fn is_confirmed(&self) -> bool {
        self.status == "success"
            && self
                .data
                .as_ref()
                .map(|data| data.status == "successful")
                .unwrap_or(false)
    }
}

/// Transaction references are unique per initiation attempt.
pub fn payment_reference() -> String {
    format!("STU-{}", Utc::now().timestamp_millis())
}

/// Payment gateway collaborator. Holds the secret key and a pre-built
/// HTTP client with the gateway timeout applied.
#[derive(Clone)]
pub struct PaymentLayer {
    secret_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl PaymentLayer {
    pub fn new(secret_key: String, base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(GATEWAY_TIMEOUT).build()?;

        Ok(Self {
            secret_key,
            base_url,
            client,
        })
    }

    /// Posts a charge to the gateway and returns its verdict. Transport
    /// failures and non-2xx responses are [`PaymentError`]; a declined
    /// charge comes back as a normal [`ChargeResponse`] for the caller to
    /// inspect.
    pub async fn initiate_charge(
        &self,
        charge: ChargeRequest,
    ) -> Result<ChargeResponse, PaymentError> {
        let url = format!("{}/charges?tx_ref={}", self.base_url, charge.tx_ref);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(&charge)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway(format!(
                "charge initiation returned {}",
                response.status()
            )));
        }

        let charge_response: ChargeResponse = response.json().await?;

        Ok(charge_response)
    }

    /// Asks the gateway to confirm a transaction by id.
    pub async fn verify_transaction(
        &self,
        transaction_id: String,
    ) -> Result<VerifyResponse, PaymentError> {
        let url = format!("{}/transactions/{}/verify", self.base_url, transaction_id);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway(format!(
                "transaction verification returned {}",
                response.status()
            )));
        }

        let verify_response: VerifyResponse = response.json().await?;

        Ok(verify_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify_response(status: &str, transaction_status: Option<&str>) -> VerifyResponse {
        VerifyResponse {
            status: String::from(status),
            data: transaction_status.map(|s| VerifyData {
                status: String::from(s),
            }),
        }
    }

    #[test]
    fn only_success_successful_confirms() {
        assert!(verify_response("success", Some("successful")).is_confirmed());
    }

    #[test]
    fn any_other_combination_does_not_confirm() {
        assert!(!verify_response("success", Some("pending")).is_confirmed());
        assert!(!verify_response("success", Some("failed")).is_confirmed());
        assert!(!verify_response("success", None).is_confirmed());
        assert!(!verify_response("error", Some("successful")).is_confirmed());
        assert!(!verify_response("failed", None).is_confirmed());
    }

    #[test]
    fn payment_link_requires_success_status() {
        let declined = ChargeResponse {
            status: String::from("error"),
            message: Some(String::from("declined")),
            data: Some(ChargeData {
                link: Some(String::from("https://pay.example/123")),
            }),
        };

        assert_eq!(declined.payment_link(), None);

        let accepted = ChargeResponse {
            status: String::from("success"),
            message: None,
            data: Some(ChargeData {
                link: Some(String::from("https://pay.example/123")),
            }),
        };

        assert_eq!(
            accepted.payment_link(),
            Some(String::from("https://pay.example/123"))
        );
    }

    #[test]
    fn payment_reference_is_prefixed() {
        let reference = payment_reference();

        assert!(reference.starts_with("STU-"));
        assert!(reference["STU-".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
