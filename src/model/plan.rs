use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPlan {
    pub id: Id,
    pub user_id: Id,
    pub name: String,
    pub target_institution: Option<Id>,
    pub target_major: Option<String>,
    pub target_transfer_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducationPlan {
    pub name: String,
    pub target_institution: Option<Id>,
    pub target_major: Option<String>,
    pub target_transfer_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

impl NewEducationPlan {
    pub fn into_plan(self, user_id: Id) -> EducationPlan {
        EducationPlan {
            id: generate_id(),
            user_id,
            name: self.name,
            target_institution: self.target_institution,
            target_major: self.target_major,
            target_transfer_date: self.target_transfer_date,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPlanUpdate {
    pub name: Option<String>,
    pub target_institution: Option<Id>,
    pub target_major: Option<String>,
    pub target_transfer_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl EducationPlanUpdate {
    pub fn apply(&self, plan: &mut EducationPlan) {
        if let Some(v) = &self.name {
            plan.name = v.clone();
        }
        if let Some(v) = &self.target_institution {
            plan.target_institution = Some(v.clone());
        }
        if let Some(v) = &self.target_major {
            plan.target_major = Some(v.clone());
        }
        if let Some(v) = self.target_transfer_date {
            plan.target_transfer_date = Some(v);
        }
        if let Some(v) = self.is_active {
            plan.is_active = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSemester {
    pub id: Id,
    pub plan_id: Id,
    /// "SPRING", "SUMMER", "FALL"
    pub term: String,
    pub year: i32,
    pub course_ids: Vec<Id>,
    /// Caller-supplied; never recomputed from the referenced courses.
    pub total_units: f64,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlannedSemester {
    pub plan_id: Id,
    pub term: String,
    pub year: i32,
    #[serde(default)]
    pub course_ids: Vec<Id>,
    #[serde(default)]
    pub total_units: f64,
    #[serde(default)]
    pub is_completed: bool,
}

impl NewPlannedSemester {
    pub fn into_semester(self) -> PlannedSemester {
        PlannedSemester {
            id: generate_id(),
            plan_id: self.plan_id,
            term: self.term,
            year: self.year,
            course_ids: self.course_ids,
            total_units: self.total_units,
            is_completed: self.is_completed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSemesterUpdate {
    pub term: Option<String>,
    pub year: Option<i32>,
    pub course_ids: Option<Vec<Id>>,
    pub total_units: Option<f64>,
    pub is_completed: Option<bool>,
}

impl PlannedSemesterUpdate {
    pub fn apply(&self, semester: &mut PlannedSemester) {
        if let Some(v) = &self.term {
            semester.term = v.clone();
        }
        if let Some(v) = self.year {
            semester.year = v;
        }
        if let Some(v) = &self.course_ids {
            semester.course_ids = v.clone();
        }
        if let Some(v) = self.total_units {
            semester.total_units = v;
        }
        if let Some(v) = self.is_completed {
            semester.is_completed = v;
        }
    }
}
