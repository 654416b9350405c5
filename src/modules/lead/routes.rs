use axum::{routing::get, Router};

use crate::modules::lead::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/leads", get(controller::list_leads).post(controller::create_lead))
        .route("/api/leads/{id}", get(controller::get_lead))
}
