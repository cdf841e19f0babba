//! Coordinate mappers between assemblies.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{GoldStdError, Result};

/// Maps 0-based positions from a source assembly onto a target assembly.
pub trait CoordinateMapper: Send + Sync {
    /// Return candidate `(chromosome, position)` pairs, best first.
    ///
    /// Positions are 0-based on both sides. An empty result means the
    /// position has no counterpart on the target assembly.
    fn convert(&self, chromosome: &str, position: u64) -> Vec<(String, u64)>;
}

/// A mapper backed by a precomputed table of position pairs.
///
/// The table is tab-separated with four columns: source chromosome, source
/// position, target chromosome, target position (all positions 0-based).
/// Lines starting with `#` are ignored, as is a header row whose position
/// columns are not numeric.
#[derive(Debug, Clone, Default)]
pub struct PositionTable {
    entries: HashMap<(String, u64), Vec<(String, u64)>>,
}

impl PositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping. Repeated source positions keep every target in insertion order.
    pub fn insert(
        &mut self,
        chromosome: impl Into<String>,
        position: u64,
        target_chromosome: impl Into<String>,
        target_position: u64,
    ) {
        self.entries
            .entry((chromosome.into(), position))
            .or_default()
            .push((target_chromosome.into(), target_position));
    }

    /// Number of distinct source positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GoldStdError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = Self::from_reader(file)?;
        debug!("Loaded {} mapped position(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse a table from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() != 4 {
                return Err(GoldStdError::Liftover(format!(
                    "row {}: expected 4 columns, found {}",
                    row_idx + 1,
                    record.len()
                )));
            }

            let source_pos = record[1].trim().parse::<u64>();
            let target_pos = record[3].trim().parse::<u64>();
            match (source_pos, target_pos) {
                (Ok(source_pos), Ok(target_pos)) => {
                    table.insert(record[0].trim(), source_pos, record[2].trim(), target_pos)
                }
                // Header row
                _ if row_idx == 0 => continue,
                _ => {
                    return Err(GoldStdError::Liftover(format!(
                        "row {}: positions must be non-negative integers",
                        row_idx + 1
                    )))
                }
            }
        }

        Ok(table)
    }
}

impl CoordinateMapper for PositionTable {
    fn convert(&self, chromosome: &str, position: u64) -> Vec<(String, u64)> {
        self.entries
            .get(&(chromosome.to_string(), position))
            .cloned()
            .unwrap_or_default()
    }
}
