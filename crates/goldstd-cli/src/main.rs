//! goldstd CLI - gold-standard variant curation.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Validate { input, schema } => commands::validate::run(input, schema),

        Commands::Process {
            inputs,
            output,
            grch37_to_38,
            grch38_to_37,
        } => commands::process::run(inputs, output, grch37_to_38, grch38_to_37),

        Commands::Flatten {
            input,
            output,
            key_sep,
            list_sep,
            output_sep,
            skip_invalid,
        } => commands::flatten::run(input, output, key_sep, list_sep, output_sep, skip_invalid),

        Commands::ToJsonl { input, output } => commands::to_jsonl::run(input, output),

        Commands::Convert { input, output } => commands::convert::run(input, output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
