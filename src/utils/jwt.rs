use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token. `sub` is the student record id.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Mints an HS256 session token binding the student id, valid for
/// `ttl_days` from now.
pub fn sign_session_token(
    student_id: &str,
    secret: &str,
    ttl_days: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = SessionClaims {
        sub: String::from(student_id),
        iat: now.timestamp(),
        exp: (now + Duration::days(ttl_days)).timestamp(),
    };

    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    jsonwebtoken::encode(&header, &claims, &key)
}

/// Verifies the signature and expiry of a session token and returns the
/// embedded student id.
pub fn verify_session_token(
    token: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = jsonwebtoken::decode::<SessionClaims>(token, &key, &validation)?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_the_student_id() {
        let token = sign_session_token("student:abc123", "test-secret", 3).unwrap();

        let subject = verify_session_token(&token, "test-secret").unwrap();

        assert_eq!(subject, "student:abc123");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_session_token("student:abc123", "test-secret", 3).unwrap();

        assert!(verify_session_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign_session_token("student:abc123", "test-secret", -1).unwrap();

        assert!(verify_session_token(&token, "test-secret").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_session_token("not.a.token", "test-secret").is_err());
    }
}
