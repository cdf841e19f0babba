//! Validate command - check records against a JSON Schema.

use std::path::PathBuf;

use colored::Colorize;
use goldstd::input::{load_document, Format};
use goldstd::validation::{validate_document, JsonSchema};

pub fn run(input: PathBuf, schema: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    Format::expect_one_of(&input, &[Format::Json, Format::Yaml])?;
    Format::expect_one_of(&schema, &[Format::Json])?;

    let document = load_document(&input)?;
    let validator = JsonSchema::load(&schema)?;

    println!(
        "{} {}",
        "Validating".cyan().bold(),
        input.display().to_string().white()
    );

    let count = validate_document(&document, &validator)?;

    println!(
        "{} {} record(s) valid",
        "SUCCESS".green().bold(),
        count.to_string().white().bold()
    );

    Ok(())
}
