//! Fuzz target for record flattening.
//!
//! This fuzzer tests that flattening:
//! 1. Never panics on any JSON object
//! 2. Is deterministic for the same record

#![no_main]

use goldstd::flatten::{FlattenConfig, flatten};
use goldstd::record::record_from_json;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Some(record) = record_from_json(value) else {
        return;
    };

    let config = FlattenConfig::default();
    let first = flatten(&record, &config);
    assert_eq!(first, flatten(&record, &config));
});
