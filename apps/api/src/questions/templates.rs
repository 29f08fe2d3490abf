//! Prompt templates for the two question categories.
//!
//! Each template lists the record fields it interpolates. The generator refuses
//! to render a template whose fields are not all present in the supplied records.

use crate::models::SchemaName;

/// A `(schema, field)` pair a template interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub schema: SchemaName,
    pub field: &'static str,
}

const fn field(schema: SchemaName, field: &'static str) -> FieldRef {
    FieldRef { schema, field }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// Short category name used in logs and errors.
    pub name: &'static str,
    /// Section heading in the combined output.
    pub heading: &'static str,
    /// System instructions. `{count}` is replaced with the requested question count and
    /// `{plain_list_instruction}` with the shared output-format directive.
    pub system_instructions: &'static str,
    /// Opening line of the user content, before the labeled record fields.
    pub user_intro: &'static str,
    pub required_record_fields: &'static [FieldRef],
}

impl PromptTemplate {
    /// Schemas referenced by this template, in order of first appearance.
    pub fn schemas(&self) -> Vec<SchemaName> {
        let mut schemas = Vec::new();
        for field_ref in self.required_record_fields {
            if !schemas.contains(&field_ref.schema) {
                schemas.push(field_ref.schema);
            }
        }
        schemas
    }

    pub fn requires(&self, schema: SchemaName, field: &str) -> bool {
        self.required_record_fields
            .iter()
            .any(|r| r.schema == schema && r.field == field)
    }
}

pub const TECHNICAL_SYSTEM: &str = "\
You are a senior technical interviewer preparing for an upcoming interview. \
Using the candidate's resume and the job posting provided, write exactly {count} technical interview questions. \
Target the skills and responsibilities the role demands, and probe the depth of the technologies and projects \
the candidate actually lists. Mix conceptual questions with practical, scenario-based ones. \
Do not ask about anything the role does not need. \
{plain_list_instruction}";

pub const BEHAVIORAL_SYSTEM: &str = "\
You are an experienced hiring manager preparing for an upcoming interview. \
Using the candidate's resume, the job posting, and the company profile provided, write exactly {count} behavioral \
interview questions. Assess how the candidate's past experience reflects the company's mission, values, and culture, \
and how they would handle the situations this role involves. Prefer open-ended questions that invite concrete examples. \
{plain_list_instruction}";

pub const TECHNICAL_TEMPLATE: PromptTemplate = PromptTemplate {
    name: "technical",
    heading: "Technical Questions",
    system_instructions: TECHNICAL_SYSTEM,
    user_intro: "Prepare technical interview questions from the following information.",
    required_record_fields: &[
        field(SchemaName::Resume, "Education"),
        field(SchemaName::Resume, "Work_experience"),
        field(SchemaName::Resume, "Skills"),
        field(SchemaName::Resume, "Certifications"),
        field(SchemaName::JobPosting, "Job_title"),
        field(SchemaName::JobPosting, "Responsibilities"),
        field(SchemaName::JobPosting, "Required_skills"),
        field(SchemaName::JobPosting, "Preferred_skills"),
        field(SchemaName::JobPosting, "Required_experience"),
    ],
};

pub const BEHAVIORAL_TEMPLATE: PromptTemplate = PromptTemplate {
    name: "behavioral",
    heading: "Behavioral Questions",
    system_instructions: BEHAVIORAL_SYSTEM,
    user_intro: "Prepare behavioral interview questions from the following information.",
    required_record_fields: &[
        field(SchemaName::Resume, "Name"),
        field(SchemaName::Resume, "Work_experience"),
        field(SchemaName::JobPosting, "Job_title"),
        field(SchemaName::JobPosting, "Responsibilities"),
        field(SchemaName::CompanyProfile, "Company_Name"),
        field(SchemaName::CompanyProfile, "Industry"),
        field(SchemaName::CompanyProfile, "Mission"),
        field(SchemaName::CompanyProfile, "Vision"),
        field(SchemaName::CompanyProfile, "Core_values"),
        field(SchemaName::CompanyProfile, "Company_culture"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_reference_declared_fields_only() {
        for template in [TECHNICAL_TEMPLATE, BEHAVIORAL_TEMPLATE] {
            for field_ref in template.required_record_fields {
                assert!(
                    field_ref.schema.schema().has_field(field_ref.field),
                    "{} references unknown field {}.{}",
                    template.name,
                    field_ref.schema,
                    field_ref.field
                );
            }
        }
    }

    #[test]
    fn test_templates_carry_count_placeholder() {
        assert!(TECHNICAL_TEMPLATE.system_instructions.contains("{count}"));
        assert!(BEHAVIORAL_TEMPLATE.system_instructions.contains("{count}"));
    }

    #[test]
    fn test_technical_template_skips_company_profile() {
        assert_eq!(
            TECHNICAL_TEMPLATE.schemas(),
            vec![SchemaName::Resume, SchemaName::JobPosting]
        );
    }

    #[test]
    fn test_behavioral_template_uses_all_three_records() {
        assert_eq!(BEHAVIORAL_TEMPLATE.schemas(), SchemaName::ALL.to_vec());
        assert!(BEHAVIORAL_TEMPLATE.requires(SchemaName::CompanyProfile, "Core_values"));
        assert!(!BEHAVIORAL_TEMPLATE.requires(SchemaName::Resume, "Skills"));
    }
}
