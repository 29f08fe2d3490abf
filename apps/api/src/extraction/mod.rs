// Structured extraction: document text -> schema-complete record via one tool call.
// All LLM calls go through the CompletionService trait — no direct API calls here.

pub mod extractor;
pub mod handlers;
pub mod prompts;

pub use extractor::extract;
