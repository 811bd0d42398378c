pub mod payments;
pub mod students;

use axum::{http::Uri, routing::get, Json, Router};
use hyper::StatusCode;
use serde_json::{json, Value};

fn api_v1_router() -> Router {
    Router::new()
        .nest("/students", students::students_router())
        .nest("/payments", payments::payments_router())
}

async fn welcome() -> &'static str {
    "Welcome to the Access2edu API!"
}

async fn unknown_route(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": format!("Can't find {} on the server", uri)
        })),
    )
}

// Main router that serves as the entry point for all routes
pub fn main_router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/api/v1", api_v1_router())
        .fallback(unknown_route)
}
