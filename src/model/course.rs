use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Id,
    pub user_id: Id,
    pub course_code: String,
    pub title: String,
    pub units: f64,
    pub description: Option<String>,
    pub institution_id: Option<Id>,
    /// "GENERAL_ED", "MAJOR_PREP", "ELECTIVE"
    pub category: Option<String>,
    /// Subject prefix, e.g. "MATH", "ENGL"
    pub subcategory: Option<String>,
    /// Prerequisite course codes, matched by value against the user's own
    /// course list at read time. A code naming no existing course is legal.
    pub prerequisites: Vec<String>,
    pub is_completed: bool,
    pub grade: Option<String>,
    pub semester_taken: Option<String>,
    pub year_taken: Option<i32>,
    pub transfers_to: Option<serde_json::Value>,
}

fn default_units() -> f64 {
    3.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_code: String,
    pub title: String,
    #[serde(default = "default_units")]
    pub units: f64,
    pub description: Option<String>,
    pub institution_id: Option<Id>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub is_completed: bool,
    pub grade: Option<String>,
    pub semester_taken: Option<String>,
    pub year_taken: Option<i32>,
    pub transfers_to: Option<serde_json::Value>,
}

impl NewCourse {
    pub fn into_course(self, user_id: Id) -> Course {
        Course {
            id: generate_id(),
            user_id,
            course_code: self.course_code,
            title: self.title,
            units: self.units,
            description: self.description,
            institution_id: self.institution_id,
            category: self.category,
            subcategory: self.subcategory,
            prerequisites: self.prerequisites,
            is_completed: self.is_completed,
            grade: self.grade,
            semester_taken: self.semester_taken,
            year_taken: self.year_taken,
            transfers_to: self.transfers_to,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub course_code: Option<String>,
    pub title: Option<String>,
    pub units: Option<f64>,
    pub description: Option<String>,
    pub institution_id: Option<Id>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub prerequisites: Option<Vec<String>>,
    pub is_completed: Option<bool>,
    pub grade: Option<String>,
    pub semester_taken: Option<String>,
    pub year_taken: Option<i32>,
    pub transfers_to: Option<serde_json::Value>,
}

impl CourseUpdate {
    pub fn apply(&self, course: &mut Course) {
        if let Some(v) = &self.course_code {
            course.course_code = v.clone();
        }
        if let Some(v) = &self.title {
            course.title = v.clone();
        }
        if let Some(v) = self.units {
            course.units = v;
        }
        if let Some(v) = &self.description {
            course.description = Some(v.clone());
        }
        if let Some(v) = &self.institution_id {
            course.institution_id = Some(v.clone());
        }
        if let Some(v) = &self.category {
            course.category = Some(v.clone());
        }
        if let Some(v) = &self.subcategory {
            course.subcategory = Some(v.clone());
        }
        if let Some(v) = &self.prerequisites {
            course.prerequisites = v.clone();
        }
        if let Some(v) = self.is_completed {
            course.is_completed = v;
        }
        if let Some(v) = &self.grade {
            course.grade = Some(v.clone());
        }
        if let Some(v) = &self.semester_taken {
            course.semester_taken = Some(v.clone());
        }
        if let Some(v) = self.year_taken {
            course.year_taken = Some(v);
        }
        if let Some(v) = &self.transfers_to {
            course.transfers_to = Some(v.clone());
        }
    }
}
