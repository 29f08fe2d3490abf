#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::schema::{RecordSchema, SchemaName};

/// Field values extracted from one document.
///
/// Records produced by the extractor are total over their schema: every declared
/// field is present, with `""` standing for "not found in the document".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub schema: SchemaName,
    pub values: BTreeMap<String, String>,
}

impl ExtractedRecord {
    /// Builds a record holding exactly the schema's fields, taking values from
    /// `values` and filling the rest with empty strings.
    pub fn fill_missing(schema: &RecordSchema, mut values: BTreeMap<String, String>) -> Self {
        let values = schema
            .field_names()
            .map(|name| (name.to_string(), values.remove(name).unwrap_or_default()))
            .collect();
        Self {
            schema: schema.name,
            values,
        }
    }

    /// Builds a record from explicit pairs without filling absent fields.
    pub fn from_pairs<K, V>(schema: SchemaName, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            schema,
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Extracted records for one run, keyed by schema.
pub type RecordSet = HashMap<SchemaName, ExtractedRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::RESUME_SCHEMA;

    #[test]
    fn test_fill_missing_inserts_empty_strings() {
        let mut values = BTreeMap::new();
        values.insert("Name".to_string(), "A. Dahari".to_string());

        let record = ExtractedRecord::fill_missing(&RESUME_SCHEMA, values);

        assert_eq!(record.values.len(), RESUME_SCHEMA.fields.len());
        assert_eq!(record.get("Name"), Some("A. Dahari"));
        assert_eq!(record.get("Certifications"), Some(""));
    }

    #[test]
    fn test_fill_missing_drops_undeclared_keys() {
        let mut values = BTreeMap::new();
        values.insert("Hobbies".to_string(), "Chess".to_string());

        let record = ExtractedRecord::fill_missing(&RESUME_SCHEMA, values);

        assert!(record.get("Hobbies").is_none());
    }

    #[test]
    fn test_from_pairs_keeps_only_given_fields() {
        let record = ExtractedRecord::from_pairs(SchemaName::Resume, [("Name", "A. Dahari")]);
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["Name"]);
    }
}
