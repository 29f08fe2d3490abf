//! Question Generator — renders a prompt template from extracted records and
//! makes exactly one completion call per invocation.
//!
//! Technical and behavioral questions are two independent invocations; neither
//! sees the other's output.

use tracing::info;

use crate::errors::PipelineError;
use crate::llm_client::prompts::PLAIN_LIST_INSTRUCTION;
use crate::llm_client::CompletionService;
use crate::models::{GenerationRequest, GenerationResult, RecordSet};
use crate::questions::templates::PromptTemplate;

/// Shown in place of empty field values so the model never sees a bare label.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "N/A";

/// Generates `count` questions for `template` from `records`.
pub async fn generate(
    service: &dyn CompletionService,
    template: &PromptTemplate,
    records: &RecordSet,
    count: u32,
) -> Result<GenerationResult, PipelineError> {
    let request = render(template, records, count)?;

    info!("Generating {count} {} questions", template.name);

    let text = service
        .complete_text(&request)
        .await
        .map_err(|e| PipelineError::generation(template.name, format!("completion failed: {e}")))?;

    Ok(GenerationResult(text))
}

/// Builds the completion request for `template` without calling the service.
///
/// User content lists the required fields grouped per schema (in the template's
/// schema order), fields in their schema-defined order, as `Label: value` lines.
pub fn render(
    template: &PromptTemplate,
    records: &RecordSet,
    count: u32,
) -> Result<GenerationRequest, PipelineError> {
    if count == 0 {
        return Err(PipelineError::generation(
            template.name,
            "question count must be a positive integer",
        ));
    }

    for field_ref in template.required_record_fields {
        let present = records
            .get(&field_ref.schema)
            .and_then(|record| record.get(field_ref.field))
            .is_some();
        if !present {
            return Err(PipelineError::MissingRecordField {
                template: template.name,
                schema: field_ref.schema,
                field: field_ref.field,
            });
        }
    }

    let system = template
        .system_instructions
        .replace("{count}", &count.to_string())
        .replace("{plain_list_instruction}", PLAIN_LIST_INSTRUCTION);

    let mut sections = vec![template.user_intro.to_string()];
    for schema_name in template.schemas() {
        // Presence of every referenced record was checked above.
        let Some(record) = records.get(&schema_name) else {
            continue;
        };

        let mut lines = vec![format!("{}:", schema_name.display_label())];
        for field in schema_name.schema().fields {
            if !template.requires(schema_name, field.name) {
                continue;
            }
            let value = record.get(field.name).unwrap_or_default().trim();
            let value = if value.is_empty() {
                EMPTY_FIELD_PLACEHOLDER
            } else {
                value
            };
            lines.push(format!("{}: {}", field_label(field.name), value));
        }
        sections.push(lines.join("\n"));
    }

    Ok(GenerationRequest::new(system, sections.join("\n\n")))
}

/// `Work_experience` -> `Work experience`.
fn field_label(name: &str) -> String {
    name.replace('_', " ")
}
