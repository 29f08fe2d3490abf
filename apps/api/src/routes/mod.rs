pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::questions::handlers as questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/extract", post(extraction::handle_extract))
        .route("/api/v1/interviews", post(questions::handle_interview))
        .route(
            "/api/v1/interviews/upload",
            post(questions::handle_interview_upload),
        )
        .with_state(state)
}
