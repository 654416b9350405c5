use mongodb::Database;

use crate::services::llm::LlmClient;

pub mod config;
pub mod error;
pub mod modules;
pub mod router;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub llm: LlmClient,
}
