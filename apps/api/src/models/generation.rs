#![allow(dead_code)]

use serde::Serialize;

/// A fully rendered completion request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    system_text: String,
    user_text: String,
}

impl GenerationRequest {
    pub fn new(system_text: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_text: system_text.into(),
            user_text: user_text.into(),
        }
    }

    pub fn system_text(&self) -> &str {
        &self.system_text
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }
}

/// Raw text returned by the completion service for a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult(pub String);

impl GenerationResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generated text after whitespace canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(pub String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
