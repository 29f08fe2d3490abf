use crate::config::Config;
use crate::pipeline::InterviewPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the completion service and document loader used by every run.
    pub pipeline: InterviewPipeline,
    pub config: Config,
}
