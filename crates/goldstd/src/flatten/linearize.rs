//! Collapsing list values into a joined string or a keyed sub-record.

use indexmap::IndexSet;

use crate::error::FlattenError;
use crate::record::{Record, Scalar, Value};

/// Outcome of linearizing a non-empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum Linearized {
    /// A list of scalars joined into one string.
    Joined(String),
    /// A list of maps, one joined string per key.
    Record(Record),
}

/// Linearize a list with `list_sep`.
///
/// Returns `Ok(None)` for an empty list, meaning the field should be dropped.
pub fn linearize(seq: &[Value], list_sep: &str) -> Result<Option<Linearized>, FlattenError> {
    linearize_at("", seq, list_sep)
}

/// Linearize the list found at key path `path`; `path` only labels errors.
pub(crate) fn linearize_at(
    path: &str,
    seq: &[Value],
    list_sep: &str,
) -> Result<Option<Linearized>, FlattenError> {
    match seq.first() {
        None => Ok(None),
        Some(Value::Record(_)) => join_records(path, seq, list_sep).map(Some),
        // Nested lists and mixed scalars fall through to string coercion.
        Some(_) => Ok(Some(Linearized::Joined(join_display(seq.iter(), list_sep)))),
    }
}

fn join_records(path: &str, seq: &[Value], list_sep: &str) -> Result<Linearized, FlattenError> {
    let mut records = Vec::with_capacity(seq.len());
    for (index, item) in seq.iter().enumerate() {
        match item {
            Value::Record(r) => records.push(r),
            _ => {
                return Err(FlattenError::MixedSequence {
                    path: path.to_string(),
                    index,
                })
            }
        }
    }

    // Union of keys in first-seen order across elements.
    let keys: IndexSet<&str> = records
        .iter()
        .flat_map(|r| r.keys().map(String::as_str))
        .collect();

    let mut joined = Record::with_capacity(keys.len());
    for key in keys {
        let mut column = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let value = record.get(key).ok_or_else(|| FlattenError::MissingKey {
                path: path.to_string(),
                key: key.to_string(),
                index,
            })?;
            column.push(value);
        }
        joined.insert(
            key.to_string(),
            Value::Scalar(Scalar::String(join_display(column.into_iter(), list_sep))),
        );
    }

    Ok(Linearized::Record(joined))
}

fn join_display<'a>(values: impl Iterator<Item = &'a Value>, sep: &str) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(sep)
}
