//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// goldstd: curate gold-standard variant records
#[derive(Parser)]
#[command(name = "goldstd")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate records against a JSON Schema
    Validate {
        /// Records to validate (JSON/YAML, one record or a list)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// JSON Schema file
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Combine validated records, fill in assembly loci and rank confidence
    Process {
        /// Validated record files (JSON/YAML)
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// GRCh37 to GRCh38 position table (TSV)
        #[arg(long = "grch37-to-38")]
        grch37_to_38: Option<PathBuf>,

        /// GRCh38 to GRCh37 position table (TSV)
        #[arg(long = "grch38-to-37")]
        grch38_to_37: Option<PathBuf>,
    },

    /// Flatten a list of records into a TSV/CSV table
    Flatten {
        /// List of records (JSON/YAML)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output table (.tsv or .csv)
        #[arg(short, long)]
        output: PathBuf,

        /// Separator joining nested field names
        #[arg(long, default_value = ".")]
        key_sep: String,

        /// Separator joining list values
        #[arg(long, default_value = "|")]
        list_sep: String,

        /// Output field separator (default: from the output extension)
        #[arg(long)]
        output_sep: Option<char>,

        /// Skip records that cannot be flattened instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Write a list of records as JSON lines
    ToJsonl {
        /// List of records (JSON/YAML)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output .jsonl file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Convert a document between JSON and YAML
    Convert {
        /// Source file (.json or .yaml)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Destination file (.yaml or .json)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}
