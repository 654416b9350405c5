use axum::{routing::get, Router};

use crate::modules::status::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(controller::root))
        .route("/api/", get(controller::root))
        .route("/health", get(controller::health))
}
