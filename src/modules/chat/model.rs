use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One chat turn. Written once and never updated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub id: String,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: bson::DateTime,
}

impl Message {
    pub fn new(session_id: String, role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            role,
            content,
            timestamp: bson::DateTime::now(),
        }
    }

    pub fn user(session_id: String, content: String) -> Self {
        Self::new(session_id, Role::User, content)
    }

    pub fn assistant(session_id: String, content: String) -> Self {
        Self::new(session_id, Role::Assistant, content)
    }

    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.try_to_rfc3339_string().unwrap_or_default()
    }
}
