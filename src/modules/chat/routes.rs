use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::chat::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(controller::chat))
        .route("/api/messages/", get(controller::get_messages_without_session))
        .route("/api/messages/{session_id}", get(controller::get_messages))
}
