use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::loader::LoadError;
use crate::models::SchemaName;

/// Failures of the extraction / generation pipeline.
///
/// Missing information is never an error: the extractor represents it as an
/// empty string. Every variant here is a real failure surfaced to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The document text could not be obtained. Not retried.
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(#[from] LoadError),

    /// Service failure or schema violation while extracting a record. Aborts the run.
    #[error("Extraction failed for {schema}: {reason}")]
    Extraction { schema: SchemaName, reason: String },

    /// A template references a record or field that was never supplied.
    /// This is a wiring bug, not a user condition.
    #[error("Template '{template}' requires {schema}.{field}, which is missing from the supplied records")]
    MissingRecordField {
        template: &'static str,
        schema: SchemaName,
        field: &'static str,
    },

    /// Service failure while generating one question category.
    #[error("Generation failed for {category}: {reason}")]
    Generation {
        category: &'static str,
        reason: String,
    },
}

impl PipelineError {
    pub fn extraction(schema: SchemaName, reason: impl Into<String>) -> Self {
        PipelineError::Extraction {
            schema,
            reason: reason.into(),
        }
    }

    pub fn generation(category: &'static str, reason: impl Into<String>) -> Self {
        PipelineError::Generation {
            category,
            reason: reason.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Pipeline wiring error: {0}")]
    Wiring(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::UnsupportedDocument(_) => AppError::UnsupportedDocument(message),
            PipelineError::Extraction { .. } => AppError::Extraction(message),
            PipelineError::MissingRecordField { .. } => AppError::Wiring(message),
            PipelineError::Generation { .. } => AppError::Generation(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedDocument(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_DOCUMENT",
                msg.clone(),
            ),
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                (StatusCode::BAD_GATEWAY, "EXTRACTION_ERROR", msg.clone())
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::BAD_GATEWAY, "GENERATION_ERROR", msg.clone())
            }
            AppError::Wiring(msg) => {
                tracing::error!("Pipeline wiring error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "WIRING_ERROR",
                    "The question templates are misconfigured".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
