use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    /// "REGISTRATION", "APPLICATION", "FINANCIAL_AID"
    #[serde(rename = "type")]
    pub deadline_type: String,
    pub priority: Priority,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeadline {
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub deadline_type: String,
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
}

impl NewDeadline {
    pub fn into_deadline(self, user_id: Id) -> Deadline {
        Deadline {
            id: generate_id(),
            user_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            deadline_type: self.deadline_type,
            priority: self.priority,
            is_completed: self.is_completed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub deadline_type: Option<String>,
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
}

impl DeadlineUpdate {
    pub fn apply(&self, deadline: &mut Deadline) {
        if let Some(v) = &self.title {
            deadline.title = v.clone();
        }
        if let Some(v) = &self.description {
            deadline.description = Some(v.clone());
        }
        if let Some(v) = self.due_date {
            deadline.due_date = v;
        }
        if let Some(v) = &self.deadline_type {
            deadline.deadline_type = v.clone();
        }
        if let Some(v) = self.priority {
            deadline.priority = v;
        }
        if let Some(v) = self.is_completed {
            deadline.is_completed = v;
        }
    }
}
