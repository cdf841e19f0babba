//! Loading gold-standard documents from JSON, YAML and JSON-lines files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{GoldStdError, Result};
use crate::record::{record_from_json, Record};

use super::format::Format;

/// Load a whole document as a JSON value.
///
/// JSON-lines files load as an array with one element per non-blank line.
pub fn load_document(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    let file = File::open(path).map_err(|e| GoldStdError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    debug!("Loading {} as {}", path.display(), format);

    let document = match format {
        Format::Json => serde_json::from_reader(reader)?,
        Format::Yaml => serde_yaml::from_reader(reader)?,
        Format::Jsonl => {
            let mut items = Vec::new();
            for line in reader.lines() {
                let line = line.map_err(|e| GoldStdError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                if line.trim().is_empty() {
                    continue;
                }
                items.push(serde_json::from_str(&line)?);
            }
            serde_json::Value::Array(items)
        }
    };

    Ok(document)
}

/// Split a document into records.
///
/// A top-level list yields each element; any other document is one record.
pub fn document_records(document: serde_json::Value) -> Result<Vec<Record>> {
    match document {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                record_from_json(item).ok_or(GoldStdError::NotARecord { record: index })
            })
            .collect(),
        other => record_from_json(other)
            .map(|r| vec![r])
            .ok_or(GoldStdError::NotARecord { record: 0 }),
    }
}

/// Load every record in a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    document_records(load_document(path)?)
}

/// Load and concatenate the records of several files, in the order given.
pub fn load_records_from<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        let loaded = load_records(path)?;
        debug!("{}: {} record(s)", path.as_ref().display(), loaded.len());
        records.extend(loaded);
    }
    info!("Loaded {} record(s) from {} file(s)", records.len(), paths.len());
    Ok(records)
}
