//! Fuzz target for schema validation.
//!
//! Validates arbitrary JSON instances against a fixed gold-standard-like
//! schema. The validator must never panic.

#![no_main]

use goldstd::validation::{JsonSchema, SchemaValidator};
use libfuzzer_sys::fuzz_target;
use serde_json::json;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(instance) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let schema = JsonSchema::new(json!({
        "type": "object",
        "required": ["sentinel_variant"],
        "properties": {
            "sentinel_variant": {
                "type": "object",
                "properties": {
                    "rsid": {"type": ["string", "null"], "pattern": "^rs[0-9]+$"},
                    "locus_GRCh37": {
                        "anyOf": [
                            {"type": "null"},
                            {"type": "object", "required": ["chromosome", "position"]}
                        ]
                    }
                }
            },
            "evidence": {"type": "array", "items": {"enum": ["High", "Low"]}}
        }
    }));

    if let Ok(schema) = schema {
        let _ = schema.validate(&instance);
    }
});
