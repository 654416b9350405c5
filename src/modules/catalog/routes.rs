use axum::{routing::get, Router};

use crate::modules::catalog::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/portfolio", get(controller::list_portfolio))
        .route("/api/packages", get(controller::list_packages))
}
