use crate::services::google::GoogleAuthLayer;
use crate::setup::Config;

pub fn setup_google_auth(config: &Config) -> GoogleAuthLayer {
    GoogleAuthLayer::new(
        config.google_client_id.clone(),
        config.google_tokeninfo_url.clone(),
    )
    .expect("failed to build the token verification HTTP client")
}
