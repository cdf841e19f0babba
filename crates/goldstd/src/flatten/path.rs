//! Recursive flattening of nested records into key-path rows.

use crate::error::FlattenError;
use crate::record::{FlatRecord, Record, Scalar, Value};

use super::config::FlattenConfig;
use super::linearize::{linearize_at, Linearized};

/// Flatten a record into a single-level mapping of key paths to scalars.
///
/// Nested maps contribute one key per leaf, joined with `config.key_sep`.
/// Lists are collapsed by [`linearize`](super::linearize): empty lists are
/// dropped, scalar lists become one `list_sep`-joined string, and lists of
/// maps become one joined string per map key.
///
/// # Example
///
/// ```
/// use goldstd::flatten::{flatten, FlattenConfig};
/// use goldstd::record::record_from_json;
///
/// let record = record_from_json(serde_json::json!({"a": {"b": 1, "c": [2, 3]}})).unwrap();
/// let flat = flatten(&record, &FlattenConfig::default()).unwrap();
///
/// assert_eq!(flat["a.b"].to_string(), "1");
/// assert_eq!(flat["a.c"].to_string(), "2|3");
/// ```
pub fn flatten(record: &Record, config: &FlattenConfig) -> Result<FlatRecord, FlattenError> {
    flatten_with_prefix(record, "", config)
}

/// Flatten a record whose keys are placed under `prefix`.
///
/// An empty prefix leaves top-level keys unqualified.
pub fn flatten_with_prefix(
    record: &Record,
    prefix: &str,
    config: &FlattenConfig,
) -> Result<FlatRecord, FlattenError> {
    let mut out = FlatRecord::new();
    flatten_into(record, prefix, config, &mut out)?;
    Ok(out)
}

fn flatten_into(
    record: &Record,
    prefix: &str,
    config: &FlattenConfig,
    out: &mut FlatRecord,
) -> Result<(), FlattenError> {
    for (key, value) in record {
        let path = join_key(prefix, key, &config.key_sep);

        match value {
            Value::Sequence(items) => match linearize_at(&path, items, &config.list_sep)? {
                None => {}
                Some(Linearized::Joined(text)) => emit(out, path, Scalar::String(text))?,
                Some(Linearized::Record(columns)) => flatten_into(&columns, &path, config, out)?,
            },
            Value::Record(nested) => flatten_into(nested, &path, config, out)?,
            Value::Scalar(scalar) => emit(out, path, scalar.clone())?,
        }
    }

    Ok(())
}

fn join_key(prefix: &str, key: &str, sep: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, sep, key)
    }
}

fn emit(out: &mut FlatRecord, path: String, value: Scalar) -> Result<(), FlattenError> {
    if out.contains_key(&path) {
        return Err(FlattenError::DuplicateKeyPath { path });
    }
    out.insert(path, value);
    Ok(())
}
