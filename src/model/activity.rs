use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit entry. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Id,
    pub user_id: Id,
    /// Action tag, e.g. "CREATE_COURSE"
    pub action: String,
    pub description: String,
    /// "COURSE", "PLAN", "DOCUMENT", etc.
    pub entity_type: Option<String>,
    pub entity_id: Option<Id>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub action: String,
    pub description: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<Id>,
}

impl NewActivityLog {
    pub fn new(action: &str, description: String, entity_type: &str, entity_id: &Id) -> Self {
        Self {
            action: action.to_string(),
            description,
            entity_type: Some(entity_type.to_string()),
            entity_id: Some(entity_id.clone()),
        }
    }

    pub fn into_activity(self, user_id: Id) -> ActivityLog {
        ActivityLog {
            id: generate_id(),
            user_id,
            action: self.action,
            description: self.description,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            timestamp: Utc::now(),
        }
    }
}
