use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::api::handlers::{ApiError, AppState, ErrorResponse};
use crate::assist::AgreementQuery;
use crate::store::traits::Store;

fn upstream_error(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&format!(
            "Failed to fetch Assist.org data: {}",
            e
        ))),
    )
}

/// GET /api/assist/institutions/:id/agreements — passthrough, no caching.
pub async fn get_institution_agreements<S: Store>(
    State(state): State<AppState<S>>,
    Path(institution_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.assist.institution_agreements(&institution_id).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => Err(upstream_error(e)),
    }
}

/// GET /api/assist/agreements — forwards the query string as-is.
pub async fn get_agreements<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<AgreementQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.assist.agreements(&query).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => Err(upstream_error(e)),
    }
}
