use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionType {
    /// California community college
    Ccc,
    /// University of California campus
    Uc,
    /// California State University campus
    Csu,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub institution_type: InstitutionType,
    /// Identifier used by the Assist.org API, when known.
    pub assist_org_id: Option<String>,
    pub abbreviation: Option<String>,
}

impl Institution {
    pub fn new(
        name: &str,
        institution_type: InstitutionType,
        assist_org_id: &str,
        abbreviation: &str,
    ) -> Self {
        Self {
            id: generate_id(),
            name: name.to_string(),
            institution_type,
            assist_org_id: Some(assist_org_id.to_string()),
            abbreviation: Some(abbreviation.to_string()),
        }
    }
}
