use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::{Message, Role};

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Session id cannot be empty"))]
    pub session_id: String,
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageResponse {
    pub id: String,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl From<&Message> for MessageResponse {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.clone(),
            session_id: m.session_id.clone(),
            role: m.role,
            content: m.content.clone(),
            timestamp: m.timestamp_rfc3339(),
        }
    }
}
