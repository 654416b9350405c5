use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::Lead;

/// Contact fields are stored as given; no format checks.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, message = "Session id cannot be empty"))]
    pub session_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub shoot_type: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub source: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeadListQuery {
    pub shoot_type: Option<String>,
    pub limit: Option<i64>,
}

impl LeadListQuery {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeadResponse {
    pub id: String,
    pub session_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub shoot_type: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub source: Option<String>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl From<&Lead> for LeadResponse {
    fn from(l: &Lead) -> Self {
        Self {
            id: l.id.clone(),
            session_id: l.session_id.clone(),
            name: l.name.clone(),
            email: l.email.clone(),
            phone: l.phone.clone(),
            shoot_type: l.shoot_type.clone(),
            preferred_date: l.preferred_date.clone(),
            preferred_time: l.preferred_time.clone(),
            source: l.source.clone(),
            message: l.message.clone(),
            timestamp: l.timestamp_rfc3339(),
        }
    }
}
