//! Process command - combine records, fill in loci and rank confidence.

use std::path::PathBuf;

use colored::Colorize;
use goldstd::input::{load_records_from, Format};
use goldstd::liftover::{AssemblyMappers, PositionTable};
use goldstd::output::write_json_pretty;
use goldstd::processing::{process_records, ProcessConfig};

pub fn run(
    inputs: Vec<PathBuf>,
    output: PathBuf,
    grch37_to_38: Option<PathBuf>,
    grch38_to_37: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    Format::expect_one_of(&output, &[Format::Json])?;

    let mut mappers = AssemblyMappers::new();
    if let Some(path) = grch37_to_38 {
        mappers = mappers.with_grch37_to_38(PositionTable::load(path)?);
    }
    if let Some(path) = grch38_to_37 {
        mappers = mappers.with_grch38_to_37(PositionTable::load(path)?);
    }

    let mut records = load_records_from(&inputs[..])?;
    println!(
        "{} {} record(s) from {} file(s)",
        "Processing".cyan().bold(),
        records.len().to_string().white().bold(),
        inputs.len()
    );

    let summary = process_records(&mut records, &mappers, &ProcessConfig::default())?;
    write_json_pretty(&output, &records)?;

    println!("  Lifted:    {}", summary.lifted.to_string().green());
    if summary.unmapped > 0 {
        println!("  Unmapped:  {}", summary.unmapped.to_string().yellow());
    }
    if summary.no_mapper > 0 {
        println!("  No mapper: {}", summary.no_mapper.to_string().yellow());
    }
    println!(
        "{} {}",
        "Wrote".green().bold(),
        output.display().to_string().cyan()
    );

    Ok(())
}
