use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub current_institution: Option<String>,
    pub target_major: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub current_institution: Option<String>,
    pub target_major: Option<String>,
}

impl NewUser {
    pub fn into_user(self) -> User {
        User {
            id: generate_id(),
            username: self.username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            current_institution: self.current_institution,
            target_major: self.target_major,
            created_at: Utc::now(),
        }
    }

    pub fn into_user_with_id(self, id: Id) -> User {
        let mut user = self.into_user();
        user.id = id;
        user
    }
}

/// Shallow-merge profile update: omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub current_institution: Option<String>,
    pub target_major: Option<String>,
}

impl UserProfileUpdate {
    pub fn apply(&self, user: &mut User) {
        if let Some(v) = &self.first_name {
            user.first_name = Some(v.clone());
        }
        if let Some(v) = &self.last_name {
            user.last_name = Some(v.clone());
        }
        if let Some(v) = &self.email {
            user.email = Some(v.clone());
        }
        if let Some(v) = &self.current_institution {
            user.current_institution = Some(v.clone());
        }
        if let Some(v) = &self.target_major {
            user.target_major = Some(v.clone());
        }
    }
}

/// Profile fields returned by `PUT /api/user/profile`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub current_institution: Option<String>,
    pub target_major: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            current_institution: user.current_institution.clone(),
            target_major: user.target_major.clone(),
        }
    }
}
