//! Input loading and format detection.

mod format;
mod loader;

pub use format::Format;
pub use loader::{document_records, load_document, load_records, load_records_from};
