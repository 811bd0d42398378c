use std::time::Duration;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::Deserialize;

pub const DEFAULT_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

const VERIFIER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Display)]
pub enum GoogleAuthError {
    Transport(reqwest::Error),
    InvalidToken,
}

impl From<reqwest::Error> for GoogleAuthError {
    fn from(error: reqwest::Error) -> Self {
        GoogleAuthError::Transport(error)
    }
}

/// Claims reported by Google's tokeninfo endpoint. `exp` arrives as a
/// string of epoch seconds.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenInfo {
    pub aud: String,
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub exp: Option<String>,
}

/// The identity this API trusts after a Google ID token checks out.
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    pub subject_id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// No claim is trusted before the audience matches the configured client
/// id and the token is unexpired. The endpoint rejects bad signatures
/// upstream; this is the local half of the check.
fn validate_claims(
    info: TokenInfo,
    client_id: &str,
    now: DateTime<Utc>,
) -> Result<GoogleIdentity, GoogleAuthError> {
    if info.aud != client_id {
        return Err(GoogleAuthError::InvalidToken);
    }

    let expires_at = info
        .exp
        .as_deref()
        .and_then(|exp| exp.parse::<i64>().ok())
        .ok_or(GoogleAuthError::InvalidToken)?;

    if now.timestamp() >= expires_at {
        return Err(GoogleAuthError::InvalidToken);
    }

    let email = info.email.ok_or(GoogleAuthError::InvalidToken)?;

    Ok(GoogleIdentity {
        subject_id: info.sub,
        email,
        name: info.name,
        picture: info.picture,
    })
}

/// Google ID-token verification collaborator.
#[derive(Clone)]
pub struct GoogleAuthLayer {
    client_id: String,
    tokeninfo_url: String,
    client: reqwest::Client,
}

impl GoogleAuthLayer {
    pub fn new(client_id: String, tokeninfo_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(VERIFIER_TIMEOUT)
            .build()?;

        Ok(Self {
            client_id,
            tokeninfo_url,
            client,
        })
    }

    /// Verifies an opaque ID token with Google and returns the identity
    /// it asserts. Any rejection by the endpoint, audience mismatch, or
    /// stale expiry is [`GoogleAuthError::InvalidToken`].
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleIdentity, GoogleAuthError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GoogleAuthError::InvalidToken);
        }

        let info: TokenInfo = response.json().await?;

        validate_claims(info, &self.client_id, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_info(aud: &str, exp: DateTime<Utc>) -> TokenInfo {
        TokenInfo {
            aud: String::from(aud),
            sub: String::from("108000000000000000001"),
            email: Some(String::from("ada@example.com")),
            name: Some(String::from("Ada Obi")),
            picture: Some(String::from("https://lh3.example/photo.jpg")),
            exp: Some(exp.timestamp().to_string()),
        }
    }

    #[test]
    fn valid_claims_yield_an_identity() {
        let info = token_info("client-123", Utc::now() + Duration::hours(1));

        let identity = validate_claims(info, "client-123", Utc::now()).unwrap();

        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(identity.subject_id, "108000000000000000001");
    }

    #[test]
    fn audience_mismatch_is_rejected() {
        let info = token_info("someone-elses-client", Utc::now() + Duration::hours(1));

        assert!(matches!(
            validate_claims(info, "client-123", Utc::now()),
            Err(GoogleAuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let info = token_info("client-123", Utc::now() - Duration::seconds(1));

        assert!(matches!(
            validate_claims(info, "client-123", Utc::now()),
            Err(GoogleAuthError::InvalidToken)
        ));
    }

    #[test]
    fn missing_email_is_rejected() {
        let mut info = token_info("client-123", Utc::now() + Duration::hours(1));
        info.email = None;

        assert!(matches!(
            validate_claims(info, "client-123", Utc::now()),
            Err(GoogleAuthError::InvalidToken)
        ));
    }
}
