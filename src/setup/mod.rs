mod config;
mod database;
mod email_service;
mod google_auth;
mod payment_service;
mod router;

pub use config::Config;
pub use database::setup_database;
pub use email_service::setup_email_service;
pub use google_auth::setup_google_auth;
pub use payment_service::setup_payment_service;
pub use router::setup_api_router;
