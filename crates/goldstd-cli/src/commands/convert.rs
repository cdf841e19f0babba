//! Convert command - JSON to YAML and back.

use std::path::PathBuf;

use colored::Colorize;
use goldstd::output::convert_document;

pub fn run(input: PathBuf, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    convert_document(&input, &output)?;

    println!(
        "{} {} -> {}",
        "Converted".green().bold(),
        input.display(),
        output.display().to_string().cyan()
    );

    Ok(())
}
