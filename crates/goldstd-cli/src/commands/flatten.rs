//! Flatten command - write a list of records as a TSV/CSV table.

use std::path::PathBuf;

use colored::Colorize;
use goldstd::flatten::{flatten_batch, flatten_batch_lenient, FlattenConfig};
use goldstd::input::{load_document, document_records, Format};
use goldstd::{Table, TableConfig};

pub fn run(
    input: PathBuf,
    output: PathBuf,
    key_sep: String,
    list_sep: String,
    output_sep: Option<char>,
    skip_invalid: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    Format::expect_one_of(&input, &[Format::Json, Format::Yaml])?;
    let mut table_config = TableConfig::for_path(&output)?;
    if let Some(sep) = output_sep {
        if !sep.is_ascii() {
            return Err(format!("Output separator must be a single ASCII character, got '{}'", sep).into());
        }
        table_config.delimiter = sep as u8;
    }
    let config = FlattenConfig::new(key_sep, list_sep);

    let document = load_document(&input)?;
    if !document.is_array() {
        return Err(format!("{} must contain a list of records", input.display()).into());
    }
    let records = document_records(document)?;

    let rows = if skip_invalid {
        let (rows, skipped) = flatten_batch_lenient(&records, &config);
        if !skipped.is_empty() {
            println!(
                "{} skipped {} record(s) that could not be flattened",
                "Warning:".yellow().bold(),
                skipped.len()
            );
        }
        rows
    } else {
        flatten_batch(&records, &config)?
    };

    let table = Table::from_flat_records(rows);
    table.write_file(&output, &table_config)?;

    if table.column_count() == 0 && table.row_count() > 0 {
        println!(
            "{} every record flattened to an empty row; the table has no columns",
            "Warning:".yellow().bold()
        );
    }

    println!(
        "{} {} row(s) x {} column(s) to {}",
        "Wrote".green().bold(),
        table.row_count().to_string().white().bold(),
        table.column_count(),
        output.display().to_string().cyan()
    );

    Ok(())
}
