// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Directive that forbids the model from filling gaps with guesses.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Extract only what is explicitly present in the document. \
    Never infer or fabricate a value. \
    If the document does not state a piece of information, leave that field as an empty string.";

/// Instruction appended to generation prompts to keep the output a plain question list.
pub const PLAIN_LIST_INSTRUCTION: &str = "\
    Return only the numbered questions, one per line. \
    Do NOT add introductions, headings, answers, or closing remarks.";
