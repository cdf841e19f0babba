//! Post-validation processing of gold-standard records.

use log::{debug, info};
use serde::Serialize;

use crate::error::{GoldStdError, Result};
use crate::liftover::{fill_in_assemblies, AssemblyMappers, LiftoverOutcome};
use crate::record::{Record, Value};

use super::confidence::{highest_confidence, DEFAULT_CONFIDENCE_ORDER};

/// Processing configuration.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Confidence labels, most confident first.
    pub confidence_order: Vec<String>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            confidence_order: DEFAULT_CONFIDENCE_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Counts of what processing did across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub records: usize,
    pub lifted: usize,
    pub unmapped: usize,
    pub no_mapper: usize,
}

/// Fill in assemblies and record the highest evidence confidence.
///
/// `index` identifies the record in error messages.
pub fn process_record(
    index: usize,
    record: &mut Record,
    mappers: &AssemblyMappers,
    config: &ProcessConfig,
) -> Result<LiftoverOutcome> {
    let variant = record
        .get_mut("sentinel_variant")
        .and_then(Value::as_record_mut)
        .ok_or_else(|| missing(index, "sentinel_variant"))?;
    let outcome = fill_in_assemblies(variant, mappers)?;

    let info = record
        .get_mut("gold_standard_info")
        .and_then(Value::as_record_mut)
        .ok_or_else(|| missing(index, "gold_standard_info"))?;
    let evidence = info
        .get("evidence")
        .and_then(Value::as_sequence)
        .ok_or_else(|| missing(index, "gold_standard_info.evidence"))?;
    let highest = highest_confidence(evidence, &config.confidence_order)
        .map_err(|message| GoldStdError::Processing { record: index, message })?;

    debug!("Record {}: highest confidence {}", index, highest);
    info.insert("highest_confidence".to_string(), Value::from(highest));

    Ok(outcome)
}

/// Process every record in order, aborting at the first failure.
pub fn process_records(
    records: &mut [Record],
    mappers: &AssemblyMappers,
    config: &ProcessConfig,
) -> Result<ProcessSummary> {
    let mut summary = ProcessSummary::default();

    for (index, record) in records.iter_mut().enumerate() {
        match process_record(index, record, mappers, config)? {
            LiftoverOutcome::Lifted { .. } => summary.lifted += 1,
            LiftoverOutcome::Unmapped { .. } => summary.unmapped += 1,
            LiftoverOutcome::NoMapper { .. } => summary.no_mapper += 1,
            LiftoverOutcome::Unchanged => {}
        }
        summary.records += 1;
    }

    info!(
        "Processed {} record(s): {} lifted, {} unmapped",
        summary.records, summary.lifted, summary.unmapped
    );
    Ok(summary)
}

fn missing(record: usize, path: &str) -> GoldStdError {
    GoldStdError::MissingField {
        record,
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liftover::PositionTable;
    use crate::record::record_from_json;
    use serde_json::json;

    fn gold_standard(locus37: serde_json::Value) -> Record {
        record_from_json(json!({
            "sentinel_variant": {"rsid": "rs7412", "locus_GRCh37": locus37},
            "gold_standard_info": {
                "gene_id": "ENSG00000130203",
                "evidence": [{"confidence": "Low"}, {"confidence": "High"}]
            }
        }))
        .unwrap()
    }

    fn mappers() -> AssemblyMappers {
        let mut table = PositionTable::new();
        table.insert("19", 45412078, "19", 44908821);
        AssemblyMappers::new().with_grch37_to_38(table)
    }

    #[test]
    fn test_process_record_adds_fields() {
        let mut record = gold_standard(json!({"chromosome": "19", "position": 45412079}));
        process_record(0, &mut record, &mappers(), &ProcessConfig::default()).unwrap();

        let json = serde_json::Value::from(Value::Record(record));
        assert_eq!(json["gold_standard_info"]["highest_confidence"], "High");
        assert_eq!(
            json["sentinel_variant"]["locus_GRCh38"],
            json!({"chromosome": "19", "position": 44908822})
        );
    }

    #[test]
    fn test_missing_section_is_reported() {
        let mut record = record_from_json(json!({"sentinel_variant": {}})).unwrap();
        let err = process_record(3, &mut record, &mappers(), &ProcessConfig::default()).unwrap_err();
        match err {
            GoldStdError::MissingField { record, path } => {
                assert_eq!(record, 3);
                assert_eq!(path, "gold_standard_info");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_process_records_summary() {
        let mut records = vec![
            gold_standard(json!({"chromosome": "19", "position": 45412079})),
            gold_standard(json!({"chromosome": "2", "position": 1})),
        ];
        let summary = process_records(&mut records, &mappers(), &ProcessConfig::default()).unwrap();
        assert_eq!(
            summary,
            ProcessSummary {
                records: 2,
                lifted: 1,
                unmapped: 1,
                no_mapper: 0
            }
        );
    }
}
