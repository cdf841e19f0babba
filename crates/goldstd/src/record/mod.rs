//! Record model shared by every stage of the pipeline.

mod value;

pub use value::{record_from_json, FlatRecord, Record, Scalar, Value};
