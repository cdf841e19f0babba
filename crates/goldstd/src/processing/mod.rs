//! Processing of validated gold-standard records.

mod confidence;
mod pipeline;

pub use confidence::{highest_confidence, DEFAULT_CONFIDENCE_ORDER};
pub use pipeline::{process_record, process_records, ProcessConfig, ProcessSummary};
