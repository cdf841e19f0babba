//! CLI command implementations.

pub mod convert;
pub mod flatten;
pub mod process;
pub mod to_jsonl;
pub mod validate;
