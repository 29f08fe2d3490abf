//! Structured Extractor — turns a record schema plus raw document text into an
//! `ExtractedRecord`.
//!
//! Flow: build field instructions → one forced tool call → validate keys →
//!       coerce values → fill missing fields with "".
//!
//! No retries here. Retry and backoff belong to the completion service.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::PipelineError;
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM_TEMPLATE};
use crate::llm_client::prompts::NO_FABRICATION_INSTRUCTION;
use crate::llm_client::{CompletionService, ToolSpec};
use crate::models::{ExtractedRecord, GenerationRequest, RecordSchema};

/// Extracts one record from `document_text`.
///
/// The result always holds exactly the schema's fields. A field the model
/// omits (or returns as null) becomes an empty string.
pub async fn extract(
    service: &dyn CompletionService,
    schema: &RecordSchema,
    document_text: &str,
) -> Result<ExtractedRecord, PipelineError> {
    if schema.fields.is_empty() {
        return Err(PipelineError::extraction(
            schema.name,
            "schema declares no fields",
        ));
    }
    if document_text.trim().is_empty() {
        return Err(PipelineError::extraction(
            schema.name,
            "document text is empty",
        ));
    }

    let request = extraction_request(schema, document_text);
    let tool = extraction_tool(schema);

    info!(
        "Extracting {} ({} fields, {} chars of text)",
        schema.name,
        schema.fields.len(),
        document_text.len()
    );

    let payload = service
        .complete_structured(&request, &tool)
        .await
        .map_err(|e| PipelineError::extraction(schema.name, format!("completion failed: {e}")))?;

    let record = parse_record(schema, &payload)
        .map_err(|reason| PipelineError::extraction(schema.name, reason))?;

    debug!(
        "Extracted {}: {} of {} fields populated",
        schema.name,
        record.values.values().filter(|v| !v.is_empty()).count(),
        schema.fields.len()
    );

    Ok(record)
}

/// Renders the extraction request for `schema`. One instruction line per field,
/// using the field description verbatim.
pub fn extraction_request(schema: &RecordSchema, document_text: &str) -> GenerationRequest {
    let document_kind = schema.name.display_label().to_lowercase();

    let field_instructions = schema
        .fields
        .iter()
        .map(|f| format!("- {}: {}", f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n");

    let system = EXTRACTION_SYSTEM_TEMPLATE
        .replace("{no_fabrication_instruction}", NO_FABRICATION_INSTRUCTION)
        .replace("{document_kind}", &document_kind)
        .replace("{tool_name}", schema.tool_name)
        .replace("{field_instructions}", &field_instructions);

    let prompt = EXTRACTION_PROMPT_TEMPLATE
        .replace("{document_kind}", &document_kind)
        .replace("{document_text}", document_text.trim());

    GenerationRequest::new(system, prompt)
}

fn extraction_tool(schema: &RecordSchema) -> ToolSpec {
    ToolSpec {
        name: schema.tool_name.to_string(),
        description: schema.description.to_string(),
        input_schema: schema.input_schema(),
    }
}

/// Validates the structured payload against the schema and builds a total record.
fn parse_record(schema: &RecordSchema, payload: &Value) -> Result<ExtractedRecord, String> {
    let object = payload
        .as_object()
        .ok_or_else(|| format!("structured output is not an object: {payload}"))?;

    let mut values = BTreeMap::new();
    for (key, value) in object {
        if !schema.has_field(key) {
            // An undeclared key without a value carries nothing to reject.
            if value.is_null() {
                continue;
            }
            return Err(format!("schema violation: undeclared field '{key}'"));
        }
        let text = coerce_value(value)
            .ok_or_else(|| format!("field '{key}' has a non-text value: {value}"))?;
        values.insert(key.clone(), text);
    }

    Ok(ExtractedRecord::fill_missing(schema, values))
}

/// Flattens a JSON value into display text. Objects are rejected.
fn coerce_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) => None,
                    scalar => coerce_value(scalar),
                })
                .collect::<Option<Vec<_>>>()?;
            Some(
                parts
                    .into_iter()
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        Value::Object(_) => None,
    }
}
