//! Error types for the goldstd library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::Violation;

/// Failures raised while flattening a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// An element of a list-of-maps lacks a key another element carries.
    #[error("List '{path}' element {index} is missing key '{key}'")]
    MissingKey {
        path: String,
        key: String,
        index: usize,
    },

    /// A list that starts with a map holds a non-map element.
    #[error("List '{path}' mixes maps and non-map values (element {index})")]
    MixedSequence { path: String, index: usize },

    /// Two source locations collapse onto the same key path.
    #[error("Duplicate key path '{path}'")]
    DuplicateKeyPath { path: String },
}

/// Main error type for goldstd operations.
#[derive(Debug, Error)]
pub enum GoldStdError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to an output stream.
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Flattening failed outside of a batch.
    #[error("Flatten error: {0}")]
    Flatten(#[from] FlattenError),

    /// Flattening failed for one record of a batch.
    #[error("Flatten error in record {record}: {source}")]
    FlattenRecord {
        record: usize,
        #[source]
        source: FlattenError,
    },

    /// A document entry is not a mapping.
    #[error("Record {record} is not a mapping")]
    NotARecord { record: usize },

    /// A record does not conform to the schema.
    #[error("Record {record} failed validation: {}", format_violations(.violations))]
    Validation {
        record: usize,
        violations: Vec<Violation>,
    },

    /// A record lacks a field required for processing.
    #[error("Record {record} is missing required field '{path}'")]
    MissingField { record: usize, path: String },

    /// A record's content cannot be processed.
    #[error("Record {record}: {message}")]
    Processing { record: usize, message: String },

    /// Coordinate mapping table could not be used.
    #[error("Liftover error: {0}")]
    Liftover(String),

    /// A schema uses a keyword or shape the validator does not support.
    #[error("Schema error: {0}")]
    Schema(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for goldstd operations.
pub type Result<T> = std::result::Result<T, GoldStdError>;
