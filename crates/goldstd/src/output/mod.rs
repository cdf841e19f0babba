//! Output writers for nested documents.

mod writer;

pub use writer::{convert_document, write_json_pretty, write_jsonl, write_jsonl_file, write_yaml};
