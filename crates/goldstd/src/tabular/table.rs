//! Row collection and delimited-text serialisation of flattened records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexSet;

use crate::error::{GoldStdError, Result};
use crate::record::{FlatRecord, Scalar};

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Text written for explicit null values.
    pub null_text: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            null_text: String::new(),
        }
    }
}

impl TableConfig {
    /// Choose the delimiter from an output file extension (`tsv` or `csv`).
    pub fn for_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let delimiter = match ext.as_str() {
            "tsv" => b'\t',
            "csv" => b',',
            _ => {
                return Err(GoldStdError::UnsupportedFormat(format!(
                    "'{}' must end with .tsv or .csv",
                    path.display()
                )))
            }
        };

        Ok(Self {
            delimiter,
            ..Self::default()
        })
    }
}

/// Flattened rows sharing one header.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Union of all row keys in first-seen order.
    pub headers: Vec<String>,
    rows: Vec<FlatRecord>,
}

impl Table {
    /// Collect rows; columns are the union of keys across the batch.
    pub fn from_flat_records(rows: Vec<FlatRecord>) -> Self {
        let headers: IndexSet<&String> = rows.iter().flat_map(|r| r.keys()).collect();
        let headers = headers.into_iter().cloned().collect();

        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a cell; `None` when the row has no value for that column.
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        let header = self.headers.get(col)?;
        self.rows.get(row)?.get(header)
    }

    /// Render one row as text cells, padding missing columns with empty cells.
    pub fn row_cells(&self, row: usize, config: &TableConfig) -> Option<Vec<String>> {
        let record = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .map(|h| match record.get(h) {
                    None => String::new(),
                    Some(Scalar::Null) => config.null_text.clone(),
                    Some(value) => value.to_string(),
                })
                .collect(),
        )
    }

    /// Write the header and all rows as delimited text.
    ///
    /// A table with rows but no columns is written as an empty header line
    /// followed by one empty line per row. A table with no rows writes nothing.
    pub fn write_delimited<W: Write>(&self, mut writer: W, config: &TableConfig) -> Result<()> {
        if self.headers.is_empty() {
            if !self.rows.is_empty() {
                let blank = vec![b'\n'; self.rows.len() + 1];
                writer.write_all(&blank).map_err(GoldStdError::Write)?;
                writer.flush().map_err(GoldStdError::Write)?;
            }
            return Ok(());
        }

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(config.delimiter)
            .from_writer(writer);

        wtr.write_record(&self.headers)?;
        for row in 0..self.rows.len() {
            if let Some(cells) = self.row_cells(row, config) {
                wtr.write_record(&cells)?;
            }
        }
        wtr.flush().map_err(csv::Error::from)?;

        Ok(())
    }

    /// Write the table to a file.
    pub fn write_file(&self, path: impl AsRef<Path>, config: &TableConfig) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GoldStdError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.write_delimited(BufWriter::new(file), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Scalar)]) -> FlatRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn text(s: &str) -> Scalar {
        Scalar::String(s.to_string())
    }

    #[test]
    fn test_headers_are_union_in_first_seen_order() {
        let table = Table::from_flat_records(vec![
            row(&[("b", text("1")), ("a", text("2"))]),
            row(&[("a", text("3")), ("c", text("4"))]),
        ]);
        assert_eq!(table.headers, vec!["b", "a", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get(1, 0), None);
        assert_eq!(table.get(1, 2), Some(&text("4")));
    }

    #[test]
    fn test_write_tsv_pads_missing_cells() {
        let table = Table::from_flat_records(vec![
            row(&[("id", text("rs1")), ("pos", Scalar::Number(10.into()))]),
            row(&[("id", text("rs2")), ("gene", text("APOE"))]),
        ]);
        let mut out = Vec::new();
        table.write_delimited(&mut out, &TableConfig::default()).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "id\tpos\tgene\nrs1\t10\t\nrs2\t\tAPOE\n");
    }

    #[test]
    fn test_null_text_is_configurable() {
        let table = Table::from_flat_records(vec![row(&[("a", Scalar::Null), ("b", Scalar::Bool(false))])]);
        let config = TableConfig {
            delimiter: b',',
            null_text: "NA".to_string(),
        };
        let mut out = Vec::new();
        table.write_delimited(&mut out, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\nNA,false\n");
    }

    #[test]
    fn test_csv_quotes_embedded_delimiter() {
        let table = Table::from_flat_records(vec![row(&[("class", text("a,b"))])]);
        let config = TableConfig {
            delimiter: b',',
            ..TableConfig::default()
        };
        let mut out = Vec::new();
        table.write_delimited(&mut out, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "class\n\"a,b\"\n");
    }

    #[test]
    fn test_config_for_path() {
        assert_eq!(TableConfig::for_path("out.tsv").unwrap().delimiter, b'\t');
        assert_eq!(TableConfig::for_path("out.CSV").unwrap().delimiter, b',');
        assert!(matches!(
            TableConfig::for_path("out.json"),
            Err(GoldStdError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let mut out = Vec::new();
        Table::default()
            .write_delimited(&mut out, &TableConfig::default())
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rows_without_columns_write_blank_lines() {
        let table = Table::from_flat_records(vec![FlatRecord::new(), FlatRecord::new()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 0);

        let mut out = Vec::new();
        table.write_delimited(&mut out, &TableConfig::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n\n\n");
    }
}
