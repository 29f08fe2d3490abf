//! Schema Registry — the three record shapes extracted from source documents.
//!
//! Schemas are literal values. Field descriptions are sent to the model verbatim
//! as extraction instructions; they are not validation rules.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Identifies which of the three fixed schemas a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaName {
    Resume,
    JobPosting,
    CompanyProfile,
}

impl SchemaName {
    pub const ALL: [SchemaName; 3] = [
        SchemaName::Resume,
        SchemaName::JobPosting,
        SchemaName::CompanyProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaName::Resume => "ResumeSchema",
            SchemaName::JobPosting => "JobPostingSchema",
            SchemaName::CompanyProfile => "CompanyProfileSchema",
        }
    }

    /// Section heading used when record fields are rendered into a prompt.
    pub fn display_label(&self) -> &'static str {
        match self {
            SchemaName::Resume => "Candidate Resume",
            SchemaName::JobPosting => "Job Posting",
            SchemaName::CompanyProfile => "Company Profile",
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            SchemaName::Resume => &RESUME_SCHEMA,
            SchemaName::JobPosting => &JOB_POSTING_SCHEMA,
            SchemaName::CompanyProfile => &COMPANY_PROFILE_SCHEMA,
        }
    }
}

impl std::fmt::Display for SchemaName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A named, ordered sequence of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: SchemaName,
    /// Tool name announced to the model for the structured response.
    pub tool_name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// JSON Schema for the tool input: one string property per field, in declared order.
    ///
    /// `required` only nudges the model. Missing fields are still filled with
    /// empty strings after the response is parsed.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in self.fields {
            properties.insert(
                field.name.to_string(),
                json!({
                    "type": "string",
                    "description": field.description,
                }),
            );
        }

        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}

pub const RESUME_SCHEMA: RecordSchema = RecordSchema {
    name: SchemaName::Resume,
    tool_name: "record_resume",
    description: "Record the facts stated in a candidate's resume.",
    fields: &[
        FieldSpec {
            name: "Name",
            description: "The candidate's full name.",
            required: true,
        },
        FieldSpec {
            name: "Education",
            description: "Degrees, institutions, and graduation years the candidate lists.",
            required: false,
        },
        FieldSpec {
            name: "Work_experience",
            description: "Past roles with employer, title, duration, and key achievements.",
            required: false,
        },
        FieldSpec {
            name: "Skills",
            description: "Technical and professional skills the candidate lists.",
            required: false,
        },
        FieldSpec {
            name: "Certifications",
            description: "Professional certifications or licenses the candidate holds.",
            required: false,
        },
    ],
};

pub const JOB_POSTING_SCHEMA: RecordSchema = RecordSchema {
    name: SchemaName::JobPosting,
    tool_name: "record_job_posting",
    description: "Record the facts stated in a job posting.",
    fields: &[
        FieldSpec {
            name: "Job_title",
            description: "The title of the advertised position.",
            required: true,
        },
        FieldSpec {
            name: "Responsibilities",
            description: "Duties and responsibilities the role involves.",
            required: false,
        },
        FieldSpec {
            name: "Required_skills",
            description: "Skills the posting states as required or mandatory.",
            required: false,
        },
        FieldSpec {
            name: "Preferred_skills",
            description: "Skills the posting states as preferred, desirable, or a plus.",
            required: false,
        },
        FieldSpec {
            name: "Required_experience",
            description: "Years or kind of experience the posting requires.",
            required: false,
        },
        FieldSpec {
            name: "Location",
            description: "Where the job is based, including remote or hybrid arrangements.",
            required: false,
        },
    ],
};

pub const COMPANY_PROFILE_SCHEMA: RecordSchema = RecordSchema {
    name: SchemaName::CompanyProfile,
    tool_name: "record_company_profile",
    description: "Record the facts stated in a company profile.",
    fields: &[
        FieldSpec {
            name: "Company_Name",
            description: "The name of the company.",
            required: true,
        },
        FieldSpec {
            name: "Industry",
            description: "The industry or sector the company operates in.",
            required: false,
        },
        FieldSpec {
            name: "Mission",
            description: "The company's mission statement.",
            required: false,
        },
        FieldSpec {
            name: "Vision",
            description: "The company's vision statement.",
            required: false,
        },
        FieldSpec {
            name: "Core_values",
            description: "The values the company says guide its work.",
            required: false,
        },
        FieldSpec {
            name: "Company_culture",
            description: "How the company describes its work environment and culture.",
            required: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_schema_field_order() {
        let names: Vec<_> = RESUME_SCHEMA.field_names().collect();
        assert_eq!(
            names,
            vec!["Name", "Education", "Work_experience", "Skills", "Certifications"]
        );
    }

    #[test]
    fn test_job_posting_schema_field_order() {
        let names: Vec<_> = JOB_POSTING_SCHEMA.field_names().collect();
        assert_eq!(
            names,
            vec![
                "Job_title",
                "Responsibilities",
                "Required_skills",
                "Preferred_skills",
                "Required_experience",
                "Location"
            ]
        );
    }

    #[test]
    fn test_company_profile_schema_field_order() {
        let names: Vec<_> = COMPANY_PROFILE_SCHEMA.field_names().collect();
        assert_eq!(
            names,
            vec![
                "Company_Name",
                "Industry",
                "Mission",
                "Vision",
                "Core_values",
                "Company_culture"
            ]
        );
    }

    #[test]
    fn test_every_field_has_a_description() {
        for name in SchemaName::ALL {
            for field in name.schema().fields {
                assert!(
                    !field.description.trim().is_empty(),
                    "{}.{} has no description",
                    name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_schema_name_lookup_matches_schema() {
        for name in SchemaName::ALL {
            assert_eq!(name.schema().name, name);
        }
    }

    #[test]
    fn test_input_schema_lists_every_field_as_string() {
        let schema = JOB_POSTING_SCHEMA.input_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), JOB_POSTING_SCHEMA.fields.len());
        assert_eq!(properties["Preferred_skills"]["type"], "string");
        assert_eq!(
            properties["Location"]["description"],
            "Where the job is based, including remote or hybrid arrangements."
        );
        assert_eq!(schema["required"], json!(["Job_title"]));
    }

    #[test]
    fn test_schema_name_serde_is_snake_case() {
        let json = serde_json::to_string(&SchemaName::CompanyProfile).unwrap();
        assert_eq!(json, r#""company_profile""#);
        let parsed: SchemaName = serde_json::from_str(r#""job_posting""#).unwrap();
        assert_eq!(parsed, SchemaName::JobPosting);
    }
}
