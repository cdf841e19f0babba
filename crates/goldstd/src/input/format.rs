//! Document format detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{GoldStdError, Result};

/// Supported nested-document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A single JSON document.
    Json,
    /// A single YAML document.
    Yaml,
    /// One JSON document per line.
    Jsonl,
}

impl Format {
    /// Detect the format of `path` from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "jsonl" => Ok(Format::Jsonl),
            _ => Err(GoldStdError::UnsupportedFormat(format!(
                "'{}' (expected .json, .yaml or .jsonl)",
                path.display()
            ))),
        }
    }

    /// Require `path` to be one of `allowed`.
    pub fn expect_one_of(path: impl AsRef<Path>, allowed: &[Format]) -> Result<Self> {
        let path = path.as_ref();
        let format = Self::from_path(path)?;
        if allowed.contains(&format) {
            Ok(format)
        } else {
            let names: Vec<String> = allowed.iter().map(|f| f.to_string()).collect();
            Err(GoldStdError::UnsupportedFormat(format!(
                "'{}' must be one of: {}",
                path.display(),
                names.join(", ")
            )))
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
            Format::Jsonl => write!(f, "jsonl"),
        }
    }
}
