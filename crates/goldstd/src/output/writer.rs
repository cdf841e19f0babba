//! Writing nested documents as JSON, YAML and JSON lines.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::{GoldStdError, Result};
use crate::input::{load_document, Format};

/// Create `path` for writing, creating missing parent directories first.
fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| GoldStdError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let file = File::create(path).map_err(|e| GoldStdError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

fn finish(path: &Path, mut writer: impl Write) -> Result<()> {
    writer.flush().map_err(|e| GoldStdError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a value as indented JSON, keeping non-ASCII text as-is.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_file(path)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n").map_err(|e| GoldStdError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    finish(path, writer)
}

/// Write a value as block-style YAML.
pub fn write_yaml<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_file(path)?;
    serde_yaml::to_writer(&mut writer, value)?;
    finish(path, writer)
}

/// Write each item as one compact JSON line.
pub fn write_jsonl<W: Write, T: Serialize>(mut writer: W, items: &[T]) -> Result<()> {
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n").map_err(GoldStdError::Write)?;
    }
    Ok(())
}

/// Write a JSON-lines file.
pub fn write_jsonl_file<T: Serialize>(path: impl AsRef<Path>, items: &[T]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_file(path)?;
    write_jsonl(&mut writer, items)?;
    finish(path, writer)
}

/// Convert a document between JSON and YAML according to the file extensions.
pub fn convert_document(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();
    let from = Format::expect_one_of(input, &[Format::Json, Format::Yaml])?;
    let to = Format::expect_one_of(output, &[Format::Json, Format::Yaml])?;

    if from == to {
        return Err(GoldStdError::UnsupportedFormat(format!(
            "source and destination are both {}; expected json/yaml or yaml/json",
            from
        )));
    }

    let document = load_document(input)?;
    match to {
        Format::Yaml => write_yaml(output, &document)?,
        _ => write_json_pretty(output, &document)?,
    }

    info!("Converted {} to {}", input.display(), output.display());
    Ok(())
}
