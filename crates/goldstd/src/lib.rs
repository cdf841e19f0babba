//! goldstd: curation toolkit for gold-standard genomic variant records.
//!
//! Records are validated against a JSON Schema, have their sentinel-variant
//! loci filled in across GRCh37 and GRCh38, and are converted between nested
//! (JSON/YAML) and tabular (TSV/CSV/JSON lines) representations.
//!
//! # Flattening
//!
//! The core of the tabular conversion is [`flatten`](flatten::flatten), which
//! turns a nested record into a single row keyed by separator-joined paths:
//!
//! ```
//! use goldstd::flatten::{flatten, FlattenConfig};
//! use goldstd::record::record_from_json;
//!
//! let record = record_from_json(serde_json::json!({
//!     "sentinel_variant": {"rsid": "rs7412"},
//!     "evidence": [{"confidence": "High"}, {"confidence": "Low"}],
//!     "tags": []
//! }))
//! .unwrap();
//!
//! let row = flatten(&record, &FlattenConfig::default()).unwrap();
//! assert_eq!(row["sentinel_variant.rsid"].to_string(), "rs7412");
//! assert_eq!(row["evidence.confidence"].to_string(), "High|Low");
//! assert!(!row.contains_key("tags"));
//! ```

pub mod error;
pub mod flatten;
pub mod input;
pub mod liftover;
pub mod output;
pub mod processing;
pub mod record;
pub mod tabular;
pub mod validation;

pub use error::{FlattenError, GoldStdError, Result};
pub use flatten::{flatten, FlattenConfig};
pub use record::{FlatRecord, Record, Scalar, Value};
pub use tabular::{Table, TableConfig};
