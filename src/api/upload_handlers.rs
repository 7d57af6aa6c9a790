use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use thiserror::Error;

use crate::api::handlers::{internal_error, ApiError, AppState, ErrorResponse};
use crate::model::{
    generate_id, Document, DocumentType, NewActivityLog, NewDocument, UserContext,
};
use crate::store::traits::Store;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Mime types accepted for document uploads.
pub const ALLOWED_MIME_TYPES: &[&str] = &["application/pdf", "text/csv", "text/plain"];

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Invalid file type. Only PDF, CSV, and TXT files are allowed.")]
    DisallowedType,
    #[error("File exceeds the 10 MB upload limit")]
    TooLarge,
}

/// Validate a file before any bytes reach the uploads directory.
pub fn validate_upload(mime_type: &str, size: usize) -> Result<(), UploadError> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(UploadError::DisallowedType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

fn bad_request(e: UploadError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(&e.to_string())))
}

/// Multipart upload: a `file` part plus an optional `type` part naming the
/// document category. The stored filename is a generated id; the original
/// name survives only as metadata.
pub async fn upload_document<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    mut multipart: Multipart,
) -> Result<Json<Document>, ApiError> {
    let mut file: Option<(String, String, axum::body::Bytes)> = None;
    let mut document_type = DocumentType::default();

    while let Some(field) = multipart.next_field().await.map_err(internal_error)? {
        match field.name() {
            Some("file") => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                // Reject on type before buffering the body.
                if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
                    return Err(bad_request(UploadError::DisallowedType));
                }
                let data = field.bytes().await.map_err(internal_error)?;
                file = Some((original_name, mime_type, data));
            }
            Some("type") => {
                let raw = field.text().await.map_err(internal_error)?;
                document_type =
                    serde_json::from_value(serde_json::Value::String(raw)).unwrap_or_default();
            }
            _ => {}
        }
    }

    let (original_name, mime_type, data) = file.ok_or(bad_request(UploadError::MissingFile))?;
    validate_upload(&mime_type, data.len()).map_err(bad_request)?;

    let stored_name = generate_id();
    tokio::fs::create_dir_all(&state.uploads_dir)
        .await
        .map_err(internal_error)?;
    tokio::fs::write(state.uploads_dir.join(&stored_name), &data)
        .await
        .map_err(internal_error)?;

    let new_document = NewDocument {
        filename: stored_name,
        original_name: original_name.clone(),
        mime_type,
        size: data.len() as u64,
        document_type,
    };
    let document = match state.store.create_document(&user.user_id, new_document).await {
        Ok(document) => document,
        Err(e) => return Err(internal_error(e)),
    };

    if let Err(e) = state
        .store
        .create_activity(
            &user.user_id,
            NewActivityLog::new(
                "UPLOAD_DOCUMENT",
                format!("Uploaded {}", original_name),
                "DOCUMENT",
                &document.id,
            ),
        )
        .await
    {
        log::warn!("failed to record activity entry: {}", e);
    }

    Ok(Json(document))
}
