use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::CreateLeadRequest;

/// A captured booking inquiry. Every submission is stored as its own record;
/// leads for the same session are never merged.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Lead {
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
    pub timestamp: bson::DateTime,
}

impl Lead {
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.try_to_rfc3339_string().unwrap_or_default()
    }
}

impl From<CreateLeadRequest> for Lead {
    fn from(req: CreateLeadRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: req.session_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            shoot_type: req.shoot_type,
            preferred_date: req.preferred_date,
            preferred_time: req.preferred_time,
            source: req.source,
            message: req.message,
            timestamp: bson::DateTime::now(),
        }
    }
}
