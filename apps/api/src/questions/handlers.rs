//! Axum route handlers for the Interview Questions API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::RecordSet;
use crate::pipeline::{InterviewQuestions, SectionOutcome, SourceDocuments, SourcePaths};
use crate::state::AppState;

/// Upper bound on questions per category for a single request.
const MAX_QUESTION_COUNT: u32 = 25;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub resume_text: String,
    pub job_posting_text: String,
    pub company_profile_text: String,
    pub question_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub question_count: u32,
    pub records: RecordSet,
    pub technical: SectionOutcome,
    pub behavioral: SectionOutcome,
    /// Both sections as one display-ready text block.
    pub combined: String,
}

impl InterviewResponse {
    fn new(run_id: Uuid, question_count: u32, questions: InterviewQuestions) -> Self {
        let combined = questions.combined_text();
        Self {
            run_id,
            generated_at: Utc::now(),
            question_count,
            records: questions.records,
            technical: questions.technical,
            behavioral: questions.behavioral,
            combined,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
///
/// Full pipeline on raw document text: extract ×3 → generate technical + behavioral.
pub async fn handle_interview(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    for (name, text) in [
        ("resume_text", &request.resume_text),
        ("job_posting_text", &request.job_posting_text),
        ("company_profile_text", &request.company_profile_text),
    ] {
        if text.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }
    }

    let count = resolve_question_count(request.question_count, state.config.question_count)?;
    let run_id = Uuid::new_v4();
    info!("Interview run {run_id}: {count} questions per category");

    let documents = SourceDocuments {
        resume: request.resume_text,
        job_posting: request.job_posting_text,
        company_profile: request.company_profile_text,
    };
    let questions = state.pipeline.run(&documents, count).await?;

    Ok(Json(InterviewResponse::new(run_id, count, questions)))
}

/// POST /api/v1/interviews/upload
///
/// Multipart variant: parts `resume`, `job_posting`, `company_profile` carry the
/// files (PDF, DOCX, TXT or MD); an optional `question_count` part overrides the
/// default. Files are staged in a temporary directory for the document loader.
pub async fn handle_interview_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<InterviewResponse>, AppError> {
    let staging = tempfile::tempdir()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create staging dir: {e}")))?;

    let mut resume = None;
    let mut job_posting = None;
    let mut company_profile = None;
    let mut requested_count = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let part = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read part '{part}': {e}")))?;

        let slot = match part.as_str() {
            "resume" => &mut resume,
            "job_posting" => &mut job_posting,
            "company_profile" => &mut company_profile,
            "question_count" => {
                requested_count = Some(parse_count_part(&data)?);
                continue;
            }
            _ => continue,
        };

        let path = staging
            .path()
            .join(format!("{part}{}", extension_suffix(file_name.as_deref())));
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to stage '{part}': {e}")))?;
        *slot = Some(path);
    }

    let paths = SourcePaths {
        resume: resume.ok_or_else(|| missing_part("resume"))?,
        job_posting: job_posting.ok_or_else(|| missing_part("job_posting"))?,
        company_profile: company_profile.ok_or_else(|| missing_part("company_profile"))?,
    };

    let count = resolve_question_count(requested_count, state.config.question_count)?;
    let run_id = Uuid::new_v4();
    info!("Interview upload run {run_id}: {count} questions per category");

    let questions = state.pipeline.run_from_paths(&paths, count).await?;

    Ok(Json(InterviewResponse::new(run_id, count, questions)))
}

fn resolve_question_count(requested: Option<u32>, default: u32) -> Result<u32, AppError> {
    let count = requested.unwrap_or(default);
    if count == 0 || count > MAX_QUESTION_COUNT {
        return Err(AppError::Validation(format!(
            "question_count must be between 1 and {MAX_QUESTION_COUNT}"
        )));
    }
    Ok(count)
}

fn parse_count_part(data: &Bytes) -> Result<u32, AppError> {
    std::str::from_utf8(data)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(|| AppError::Validation("question_count must be an integer".to_string()))
}

/// Keeps the uploaded file's extension so the loader can pick a format.
fn extension_suffix(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

fn missing_part(name: &str) -> AppError {
    AppError::Validation(format!("Missing multipart file part '{name}'"))
}
