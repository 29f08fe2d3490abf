// All LLM prompt constants for the extraction module.

/// System prompt for structured extraction.
/// Replace: {no_fabrication_instruction}, {document_kind}, {field_instructions}, {tool_name}
pub const EXTRACTION_SYSTEM_TEMPLATE: &str = r#"You are a meticulous document analyst extracting facts from a {document_kind}.

{no_fabrication_instruction}

Record your findings by calling the `{tool_name}` tool exactly once.
Use only the field names listed below. Every value must be a plain string.

FIELDS TO EXTRACT:
{field_instructions}"#;

/// Extraction user prompt. Replace `{document_kind}` and `{document_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the fields from the following {document_kind}.

DOCUMENT:
{document_text}"#;
