use axum::{
    http::{header, Method},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    routes,
    services::{
        database::DatabaseLayer, email::EmailLayer, google::GoogleAuthLayer,
        payment::PaymentLayer,
    },
    setup::Config,
};

pub async fn setup_api_router(
    config: Config,
    database_layer: DatabaseLayer,
    email_layer: EmailLayer,
    payment_layer: PaymentLayer,
    google_auth_layer: GoogleAuthLayer,
) -> (Router, TcpListener) {
    let address = format!("0.0.0.0:{}", config.port);

    // Credentialed CORS forbids the wildcard origin, so the requesting
    // origin is echoed back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let app = routes::main_router()
        .layer(Extension(config))
        .layer(Extension(database_layer))
        .layer(Extension(email_layer))
        .layer(Extension(payment_layer))
        .layer(Extension(google_auth_layer))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(address).await.unwrap();

    (app, listener)
}
