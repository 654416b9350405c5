use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::CreateFeedbackRequest;

const DEFAULT_PAGE: &str = "/contact";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Feedback {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub message: String,
    pub page: String,
    pub status: String,
    pub created_at: bson::DateTime,
}

impl Feedback {
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.try_to_rfc3339_string().unwrap_or_default()
    }
}

impl From<CreateFeedbackRequest> for Feedback {
    fn from(req: CreateFeedbackRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            email: req.email,
            rating: req.rating,
            message: req.message,
            page: req.page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            status: "new".to_string(),
            created_at: bson::DateTime::now(),
        }
    }
}
