use crate::model::{generate_id, Id, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSchool {
    pub id: Id,
    pub user_id: Id,
    pub institution_id: Id,
    /// Denormalized from the institution at creation time.
    pub institution_name: String,
    pub major: String,
    pub target_date: DateTime<Utc>,
    pub priority: Priority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTargetSchool {
    pub institution_id: Id,
    pub institution_name: String,
    pub major: String,
    pub target_date: DateTime<Utc>,
    pub priority: Priority,
    pub notes: Option<String>,
}

impl NewTargetSchool {
    pub fn into_target_school(self, user_id: Id) -> TargetSchool {
        TargetSchool {
            id: generate_id(),
            user_id,
            institution_id: self.institution_id,
            institution_name: self.institution_name,
            major: self.major,
            target_date: self.target_date,
            priority: self.priority,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}
