mod errors;
mod extractors;
mod routes;
mod services;
mod setup;
mod utils;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use setup::{
    setup_api_router, setup_database, setup_email_service, setup_google_auth,
    setup_payment_service, Config,
};

#[tokio::main]
async fn main() -> surrealdb::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let database_layer = setup_database(&config).await?;
    let email_layer = setup_email_service(&config);
    let payment_layer = setup_payment_service(&config);
    let google_auth_layer = setup_google_auth(&config);

    let (app, listener) = setup_api_router(
        config,
        database_layer,
        email_layer,
        payment_layer,
        google_auth_layer,
    )
    .await;

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();

    Ok(())
}
