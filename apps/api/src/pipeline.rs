//! Interview pipeline — orchestrates the full run.
//!
//! Flow: load ×3 → extract ×3 (fail-fast join) → generate ×2 (independent) →
//!       normalize ×2 → combined output.
//!
//! Extraction failures abort the run before any generation call. A generation
//! failure only affects its own category; the run fails only when both do.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::PipelineError;
use crate::extraction::extract;
use crate::llm_client::CompletionService;
use crate::loader::{DocumentLoader, LoadError};
use crate::models::{ExtractedRecord, NormalizedText, RecordSet, SchemaName};
use crate::questions::{
    generate, normalize, PromptTemplate, BEHAVIORAL_TEMPLATE, TECHNICAL_TEMPLATE,
};

/// How the three extraction calls are dispatched. Both modes yield the same records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchMode {
    #[default]
    Concurrent,
    Sequential,
}

impl DispatchMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Some(DispatchMode::Concurrent),
            "sequential" => Some(DispatchMode::Sequential),
            _ => None,
        }
    }
}

/// Raw text of the three source documents.
#[derive(Debug, Clone)]
pub struct SourceDocuments {
    pub resume: String,
    pub job_posting: String,
    pub company_profile: String,
}

/// Paths of the three source documents.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub resume: PathBuf,
    pub job_posting: PathBuf,
    pub company_profile: PathBuf,
}

/// Outcome of one question category. Partial success across categories is allowed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Generated { questions: NormalizedText },
    Failed { error: String },
}

impl SectionOutcome {
    fn from_result(result: Result<NormalizedText, PipelineError>) -> Self {
        match result {
            Ok(questions) => SectionOutcome::Generated { questions },
            Err(e) => SectionOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    pub fn questions(&self) -> Option<&NormalizedText> {
        match self {
            SectionOutcome::Generated { questions } => Some(questions),
            SectionOutcome::Failed { .. } => None,
        }
    }
}

/// Result of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestions {
    pub records: RecordSet,
    pub technical: SectionOutcome,
    pub behavioral: SectionOutcome,
}

impl InterviewQuestions {
    /// The combined text block: two labeled sections separated by a blank line.
    pub fn combined_text(&self) -> String {
        [
            (TECHNICAL_TEMPLATE.heading, &self.technical),
            (BEHAVIORAL_TEMPLATE.heading, &self.behavioral),
        ]
        .iter()
        .map(|(heading, outcome)| match outcome {
            SectionOutcome::Generated { questions } => format!("{heading}\n{questions}"),
            SectionOutcome::Failed { error } => format!("{heading}\n[unavailable: {error}]"),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

/// Stateless between runs; holds only its collaborators.
#[derive(Clone)]
pub struct InterviewPipeline {
    service: Arc<dyn CompletionService>,
    loader: Arc<dyn DocumentLoader>,
    dispatch: DispatchMode,
}

impl InterviewPipeline {
    pub fn new(
        service: Arc<dyn CompletionService>,
        loader: Arc<dyn DocumentLoader>,
        dispatch: DispatchMode,
    ) -> Self {
        Self {
            service,
            loader,
            dispatch,
        }
    }

    /// Loads all three documents, then runs the pipeline on their text.
    /// Any load failure returns before the completion service is contacted.
    pub async fn run_from_paths(
        &self,
        paths: &SourcePaths,
        count: u32,
    ) -> Result<InterviewQuestions, PipelineError> {
        let documents = self.load_all(paths).await?;
        self.run(&documents, count).await
    }

    /// Runs extraction and generation on already-loaded text.
    pub async fn run(
        &self,
        documents: &SourceDocuments,
        count: u32,
    ) -> Result<InterviewQuestions, PipelineError> {
        let records = self.extract_all(documents).await?;
        info!("All {} records extracted", records.len());

        let (technical, behavioral) = tokio::join!(
            self.generate_section(&TECHNICAL_TEMPLATE, &records, count),
            self.generate_section(&BEHAVIORAL_TEMPLATE, &records, count),
        );

        // A wiring bug is not a per-category failure.
        let (technical, behavioral) = match (technical, behavioral) {
            (Err(e @ PipelineError::MissingRecordField { .. }), _)
            | (_, Err(e @ PipelineError::MissingRecordField { .. })) => return Err(e),
            (Err(technical), Err(behavioral)) => {
                return Err(PipelineError::generation(
                    "all categories",
                    format!("{technical}; {behavioral}"),
                ))
            }
            results => results,
        };

        Ok(InterviewQuestions {
            records,
            technical: SectionOutcome::from_result(technical),
            behavioral: SectionOutcome::from_result(behavioral),
        })
    }

    /// Extracts all three records. Fails as soon as any extraction fails.
    pub async fn extract_all(
        &self,
        documents: &SourceDocuments,
    ) -> Result<RecordSet, PipelineError> {
        let resume = self.extract_record(SchemaName::Resume, &documents.resume);
        let job_posting = self.extract_record(SchemaName::JobPosting, &documents.job_posting);
        let company =
            self.extract_record(SchemaName::CompanyProfile, &documents.company_profile);

        let (resume, job_posting, company) = match self.dispatch {
            DispatchMode::Concurrent => tokio::try_join!(resume, job_posting, company)?,
            DispatchMode::Sequential => (resume.await?, job_posting.await?, company.await?),
        };

        Ok([resume, job_posting, company]
            .into_iter()
            .map(|record| (record.schema, record))
            .collect())
    }

    /// Extracts a single record of the given kind.
    pub async fn extract_record(
        &self,
        schema: SchemaName,
        text: &str,
    ) -> Result<ExtractedRecord, PipelineError> {
        extract(self.service.as_ref(), schema.schema(), text).await
    }

    async fn generate_section(
        &self,
        template: &PromptTemplate,
        records: &RecordSet,
        count: u32,
    ) -> Result<NormalizedText, PipelineError> {
        let result = generate(self.service.as_ref(), template, records, count)
            .await
            .map(|raw| normalize(&raw));
        if let Err(e) = &result {
            warn!("{} questions unavailable: {e}", template.name);
        }
        result
    }

    async fn load_all(&self, paths: &SourcePaths) -> Result<SourceDocuments, PipelineError> {
        let (resume, job_posting, company_profile) = tokio::try_join!(
            self.load(&paths.resume),
            self.load(&paths.job_posting),
            self.load(&paths.company_profile),
        )?;
        Ok(SourceDocuments {
            resume,
            job_posting,
            company_profile,
        })
    }

    async fn load(&self, path: &Path) -> Result<String, PipelineError> {
        let loader = Arc::clone(&self.loader);
        let path = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || loader.load(&path))
            .await
            .map_err(|e| LoadError::Task(e.to_string()))??;
        Ok(text)
    }
}
