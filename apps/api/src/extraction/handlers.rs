//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ExtractedRecord, SchemaName};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub kind: SchemaName,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub record: ExtractedRecord,
}

/// POST /api/v1/extract
///
/// Extracts a single record from raw document text.
/// Useful for previewing extraction before generating questions.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let record = state
        .pipeline
        .extract_record(request.kind, &request.text)
        .await?;

    Ok(Json(ExtractResponse { record }))
}

