//! Flattening of nested records into tabular rows.

mod config;
mod linearize;
mod path;

pub use config::{FlattenConfig, DEFAULT_KEY_SEP, DEFAULT_LIST_SEP};
pub use linearize::{linearize, Linearized};
pub use path::{flatten, flatten_with_prefix};

use log::{debug, warn};

use crate::error::{FlattenError, GoldStdError, Result};
use crate::record::{FlatRecord, Record};

/// Flatten every record in order, aborting at the first failure.
pub fn flatten_batch(records: &[Record], config: &FlattenConfig) -> Result<Vec<FlatRecord>> {
    let mut rows = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        debug!("Flattening record {} of {}", index + 1, records.len());
        let row = flatten(record, config)
            .map_err(|source| GoldStdError::FlattenRecord { record: index, source })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Records skipped by [`flatten_batch_lenient`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the input batch.
    pub index: usize,
    /// Why it was skipped.
    pub error: FlattenError,
}

/// Flatten every record, skipping and logging the ones that fail.
pub fn flatten_batch_lenient(
    records: &[Record],
    config: &FlattenConfig,
) -> (Vec<FlatRecord>, Vec<SkippedRecord>) {
    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match flatten(record, config) {
            Ok(row) => rows.push(row),
            Err(error) => {
                warn!("Skipping record {}: {}", index, error);
                skipped.push(SkippedRecord { index, error });
            }
        }
    }

    (rows, skipped)
}
