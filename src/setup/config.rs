use std::env;

use crate::services::{google, payment};

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| String::from(default))
}

/// Secrets have no sensible default. A missing one leaves the value
/// empty so the server still boots for local work, but it is logged.
fn env_secret(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::warn!("{} is not set", key);
        String::new()
    })
}

/// Everything the API reads from the environment, resolved once at
/// startup. Injected into the router as an extension so route handlers
/// and extractors share the same values.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,

    pub database_username: String,
    pub database_password: String,
    pub database_url: String,
    pub database_namespace: String,
    pub database_name: String,

    pub resend_api_key: String,
    pub email_domain: String,

    pub jwt_secret: String,
    pub session_ttl_days: i64,
    pub oauth_session_ttl_days: i64,

    pub google_client_id: String,
    pub google_tokeninfo_url: String,

    pub flutterwave_secret_key: String,
    pub flutterwave_base_url: String,

    pub frontend_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", "8080").parse().unwrap_or(8080),

            database_username: env_or("SURREAL_USERNAME", "root"),
            database_password: env_or("SURREAL_PASSWORD", "root"),
            database_url: env_or("SURREAL_URL", "127.0.0.1:8000"),
            database_namespace: env_or("SURREAL_NAMESPACE", "access2edu"),
            database_name: env_or("SURREAL_DATABASE", "main"),

            resend_api_key: env_secret("RESEND_API_KEY"),
            email_domain: env_or("EMAIL_DOMAIN", "access2edu.com"),

            jwt_secret: env_secret("JWT_SECRET"),
            session_ttl_days: env_or("SESSION_TTL_DAYS", "3").parse().unwrap_or(3),
            oauth_session_ttl_days: env_or("OAUTH_SESSION_TTL_DAYS", "7").parse().unwrap_or(7),

            google_client_id: env_secret("GOOGLE_CLIENT_ID"),
            google_tokeninfo_url: env_or("GOOGLE_TOKENINFO_URL", google::DEFAULT_TOKENINFO_URL),

            flutterwave_secret_key: env_secret("FLUTTERWAVE_SECRET_KEY"),
            flutterwave_base_url: env_or("FLUTTERWAVE_BASE_URL", payment::DEFAULT_BASE_URL),

            frontend_url: env_or("FRONTEND_URL", "http://localhost:5173"),
        }
    }
}
