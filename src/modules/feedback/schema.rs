use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    #[validate(custom(function = "validate_feedback_message"))]
    pub message: String,
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub page: Option<String>,
}

impl CreateFeedbackRequest {
    /// Trims free-text fields and treats blank optional fields as absent.
    /// A rating of 0 means no star was picked.
    pub fn normalized(self) -> Self {
        Self {
            message: self.message.trim().to_string(),
            name: non_blank(self.name),
            email: non_blank(self.email),
            rating: self.rating.filter(|r| *r != 0),
            page: non_blank(self.page),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_feedback_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().chars().count() < 5 {
        let mut err = ValidationError::new("length");
        err.message = Some("Message is required and must be at least 5 characters".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub ok: bool,
    pub id: String,
    pub created_at: String,
}
