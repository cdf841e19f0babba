//! Fuzz target for document loading.
//!
//! Writes arbitrary bytes to JSON, YAML and JSON-lines files and loads them.
//! Loading must return an error rather than panic on malformed input.

#![no_main]

use std::io::Write;

use goldstd::input::load_records;
use libfuzzer_sys::fuzz_target;
use tempfile::Builder;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    for suffix in [".json", ".yaml", ".jsonl"] {
        let Ok(mut file) = Builder::new().suffix(suffix).tempfile() else {
            return;
        };
        if file.write_all(data).is_err() {
            return;
        }
        let _ = load_records(file.path());
    }
});
