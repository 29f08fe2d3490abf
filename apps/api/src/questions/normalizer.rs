//! Response Normalizer — whitespace canonicalization of generated text.
//!
//! No interpretation of numbering or markdown happens here.

use crate::models::{GenerationResult, NormalizedText};

/// Trims every line, drops blank lines, and rejoins with a single `\n`.
pub fn normalize(raw: &GenerationResult) -> NormalizedText {
    normalize_str(raw.as_str())
}

pub fn normalize_str(raw: &str) -> NormalizedText {
    NormalizedText(
        raw.split(|c: char| c == '\n' || c == '\r')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
