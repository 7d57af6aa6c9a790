use crate::model::{generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    #[default]
    Transcript,
    DegreeAudit,
    ArticulationAgreement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Id,
    pub user_id: Id,
    /// Name of the stored file on disk (a generated UUID).
    pub filename: String,
    /// Name the file had when uploaded.
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Text extraction is unimplemented; always `None`.
    pub extracted_text: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub document_type: DocumentType,
}

impl NewDocument {
    pub fn into_document(self, user_id: Id) -> Document {
        Document {
            id: generate_id(),
            user_id,
            filename: self.filename,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            document_type: self.document_type,
            extracted_text: None,
            uploaded_at: Utc::now(),
        }
    }
}
