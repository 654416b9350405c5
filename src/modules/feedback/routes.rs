use axum::{routing::post, Router};

use crate::modules::feedback::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/feedback", post(controller::create_feedback))
}
