// Interview question generation: template rendering, one completion per
// category, whitespace normalization of the reply.

pub mod generator;
pub mod handlers;
pub mod normalizer;
pub mod templates;

pub use generator::generate;
pub use normalizer::normalize;
pub use templates::{PromptTemplate, BEHAVIORAL_TEMPLATE, TECHNICAL_TEMPLATE};
