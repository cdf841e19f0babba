//! To-JSONL command - write a list of records one per line.

use std::path::PathBuf;

use colored::Colorize;
use goldstd::input::{load_document, Format};
use goldstd::output::write_jsonl_file;

pub fn run(input: PathBuf, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    Format::expect_one_of(&input, &[Format::Json, Format::Yaml])?;
    Format::expect_one_of(&output, &[Format::Jsonl])?;

    let document = load_document(&input)?;
    let records = match document {
        serde_json::Value::Array(items) => items,
        _ => return Err(format!("{} must contain a list of records", input.display()).into()),
    };

    write_jsonl_file(&output, &records)?;

    println!(
        "{} {} line(s) to {}",
        "Wrote".green().bold(),
        records.len().to_string().white().bold(),
        output.display().to_string().cyan()
    );

    Ok(())
}
