//! Schema validation of gold-standard documents.

mod schema;
mod violation;

pub use schema::{JsonSchema, SchemaValidator};
pub use violation::Violation;

use log::info;
use serde_json::Value;

use crate::error::{GoldStdError, Result};

/// Validate a document holding one record or a list of records.
///
/// Stops at the first invalid record. Returns the number of records checked.
pub fn validate_document(document: &Value, validator: &dyn SchemaValidator) -> Result<usize> {
    match document {
        Value::Array(records) => {
            for (index, record) in records.iter().enumerate() {
                info!("Validating record {} of {}...", index, records.len());
                check_record(index, record, validator)?;
            }
            Ok(records.len())
        }
        record => {
            info!("Validating single record...");
            check_record(0, record, validator)?;
            Ok(1)
        }
    }
}

fn check_record(index: usize, record: &Value, validator: &dyn SchemaValidator) -> Result<()> {
    let violations = validator.validate(record);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(GoldStdError::Validation {
            record: index,
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> JsonSchema {
        JsonSchema::new(json!({"type": "object", "required": ["rsid"]})).unwrap()
    }

    #[test]
    fn test_validate_list_counts_records() {
        let doc = json!([{"rsid": "rs1"}, {"rsid": "rs2"}]);
        assert_eq!(validate_document(&doc, &schema()).unwrap(), 2);
    }

    #[test]
    fn test_validate_single_record() {
        assert_eq!(validate_document(&json!({"rsid": "rs1"}), &schema()).unwrap(), 1);
    }

    #[test]
    fn test_first_invalid_record_is_reported() {
        let doc = json!([{"rsid": "rs1"}, {}, {}]);
        match validate_document(&doc, &schema()).unwrap_err() {
            GoldStdError::Validation { record, violations } => {
                assert_eq!(record, 1);
                assert_eq!(violations.len(), 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
