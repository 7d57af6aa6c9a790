use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Manual,
    Api,
    Upload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticulationAgreement {
    pub id: Id,
    pub user_id: Id,
    pub sending_institution_id: Id,
    pub receiving_institution_id: Id,
    /// e.g. "2025-2026"
    pub academic_year: String,
    pub major: Option<String>,
    pub source_type: SourceType,
    /// Opaque course-mapping payload, stored as received.
    pub agreement_data: Option<serde_json::Value>,
    pub assist_org_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticulationAgreement {
    pub sending_institution_id: Id,
    pub receiving_institution_id: Id,
    pub academic_year: String,
    pub major: Option<String>,
    pub source_type: SourceType,
    pub agreement_data: Option<serde_json::Value>,
    pub assist_org_key: Option<String>,
}

impl NewArticulationAgreement {
    pub fn into_agreement(self, user_id: Id) -> ArticulationAgreement {
        ArticulationAgreement {
            id: generate_id(),
            user_id,
            sending_institution_id: self.sending_institution_id,
            receiving_institution_id: self.receiving_institution_id,
            academic_year: self.academic_year,
            major: self.major,
            source_type: self.source_type,
            agreement_data: self.agreement_data,
            assist_org_key: self.assist_org_key,
            created_at: Utc::now(),
        }
    }
}
