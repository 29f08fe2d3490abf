pub mod generation;
pub mod record;
pub mod schema;

pub use generation::{GenerationRequest, GenerationResult, NormalizedText};
pub use record::{ExtractedRecord, RecordSet};
pub use schema::{
    FieldSpec, RecordSchema, SchemaName, COMPANY_PROFILE_SCHEMA, JOB_POSTING_SCHEMA,
    RESUME_SCHEMA,
};
