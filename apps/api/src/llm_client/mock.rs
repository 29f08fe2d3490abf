//! Scripted `CompletionService` for tests. Counts calls and records requests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{CompletionService, LlmError, ToolSpec};
use crate::models::GenerationRequest;

#[derive(Default)]
pub struct MockCompletionService {
    /// Tool name -> structured payload. Missing tools fail with `MissingToolCall`.
    structured: HashMap<String, Value>,
    /// Text replies keyed by a substring of the system text. Checked in order.
    text: Vec<(String, String)>,
    fail_structured: bool,
    failing_text_markers: Vec<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_structured(mut self, tool_name: &str, payload: Value) -> Self {
        self.structured.insert(tool_name.to_string(), payload);
        self
    }

    pub fn with_text(mut self, system_marker: &str, reply: &str) -> Self {
        self.text.push((system_marker.to_string(), reply.to_string()));
        self
    }

    pub fn failing_structured(mut self) -> Self {
        self.fail_structured = true;
        self
    }

    pub fn failing_text_for(mut self, system_marker: &str) -> Self {
        self.failing_text_markers.push(system_marker.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: &GenerationRequest) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
    }
}

#[async_trait]
impl CompletionService for MockCompletionService {
    async fn complete_text(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.record(request);

        let system = request.system_text();
        if self
            .failing_text_markers
            .iter()
            .any(|marker| system.contains(marker.as_str()))
        {
            return Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            });
        }

        self.text
            .iter()
            .find(|(marker, _)| system.contains(marker.as_str()))
            .map(|(_, reply)| reply.clone())
            .ok_or(LlmError::EmptyContent)
    }

    async fn complete_structured(
        &self,
        request: &GenerationRequest,
        tool: &ToolSpec,
    ) -> Result<Value, LlmError> {
        self.record(request);

        if self.fail_structured {
            return Err(LlmError::RateLimited { retries: 3 });
        }

        self.structured
            .get(&tool.name)
            .cloned()
            .ok_or_else(|| LlmError::MissingToolCall {
                tool: tool.name.clone(),
            })
    }
}
