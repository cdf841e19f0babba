//! A JSON-Schema validator covering the keywords gold-standard schemas use.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{GoldStdError, Result};
use crate::input::load_document;

use super::violation::Violation;

/// Trait for schema validators.
pub trait SchemaValidator {
    /// Check `instance` and return every violation found.
    fn validate(&self, instance: &Value) -> Vec<Violation>;
}

/// Keywords that carry no assertion and are skipped.
const ANNOTATIONS: &[&str] = &[
    "$schema",
    "$id",
    "id",
    "$comment",
    "title",
    "description",
    "default",
    "examples",
    "format",
    "readOnly",
    "writeOnly",
    "deprecated",
    "contentMediaType",
    "contentEncoding",
];

/// Assertion keywords whose values are not subschemas.
const LEAF_ASSERTIONS: &[&str] = &[
    "$ref",
    "type",
    "enum",
    "const",
    "required",
    "minProperties",
    "maxProperties",
    "dependentRequired",
    "minItems",
    "maxItems",
    "uniqueItems",
    "minLength",
    "maxLength",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
];

/// Validates instances against a JSON Schema document.
///
/// Supported assertions: `$ref` (local), `type`, `enum`, `const`,
/// `required`, `properties`, `patternProperties`, `additionalProperties`,
/// `propertyNames`, `minProperties`, `maxProperties`, `dependencies`,
/// `dependentRequired`, `dependentSchemas`, `items` (single or tuple),
/// `additionalItems`, `contains`, `minItems`, `maxItems`, `uniqueItems`,
/// `minLength`, `maxLength`, `pattern`, `minimum`, `maximum`,
/// `exclusiveMinimum`, `exclusiveMaximum` (numeric or draft-4 boolean),
/// `multipleOf`, `allOf`, `anyOf`, `oneOf`, `not` and `if`/`then`/`else`.
///
/// Annotations such as `title` or `format` are skipped. Any other keyword is
/// rejected by [`JsonSchema::new`].
#[derive(Debug, Clone)]
pub struct JsonSchema {
    root: Value,
    patterns: HashMap<String, Regex>,
}

impl JsonSchema {
    /// Build a validator, compiling every regular expression up front.
    ///
    /// Fails on unsupported keywords and on subschemas that are neither
    /// objects nor booleans.
    pub fn new(root: Value) -> Result<Self> {
        let mut patterns = HashMap::new();
        compile(&root, "#", &mut patterns)?;
        Ok(Self { root, patterns })
    }

    /// Load a schema from a JSON or YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(load_document(path)?)
    }

    fn check(&self, schema: &Value, instance: &Value, path: &str, out: &mut Vec<Violation>) {
        let schema = match schema {
            Value::Bool(true) => return,
            Value::Bool(false) => {
                out.push(Violation::new(path, "no value is allowed here"));
                return;
            }
            Value::Object(map) => map,
            _ => return,
        };

        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            match self.resolve(reference) {
                Some(target) => self.check(target, instance, path, out),
                None => out.push(Violation::new(path, format!("unresolvable $ref '{}'", reference))),
            }
        }

        if let Some(expected) = schema.get("type") {
            if !type_allows(expected, instance) {
                out.push(Violation::new(
                    path,
                    format!("{} is not of type {}", instance, expected),
                ));
                return;
            }
        }

        if let Some(Value::Array(options)) = schema.get("enum") {
            if !options.iter().any(|option| json_equal(option, instance)) {
                out.push(Violation::new(
                    path,
                    format!("{} is not one of {}", instance, Value::Array(options.clone())),
                ));
            }
        }

        if let Some(expected) = schema.get("const") {
            if !json_equal(expected, instance) {
                out.push(Violation::new(path, format!("{} was expected", expected)));
            }
        }

        match instance {
            Value::Object(fields) => self.check_object(schema, fields, path, out),
            Value::Array(items) => self.check_array(schema, items, path, out),
            Value::String(s) => self.check_string(schema, s, path, out),
            Value::Number(n) => {
                if let Some(x) = n.as_f64() {
                    check_number(schema, x, path, out);
                }
            }
            _ => {}
        }

        self.check_combinators(schema, instance, path, out);
        self.check_conditional(schema, instance, path, out);
    }

    fn check_object(
        &self,
        schema: &Map<String, Value>,
        fields: &Map<String, Value>,
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        if let Some(Value::Array(required)) = schema.get("required") {
            for name in required.iter().filter_map(Value::as_str) {
                if !fields.contains_key(name) {
                    out.push(Violation::new(path, format!("'{}' is a required property", name)));
                }
            }
        }

        let count = fields.len() as u64;
        if let Some(min) = schema.get("minProperties").and_then(Value::as_u64) {
            if count < min {
                out.push(Violation::new(path, format!("expected at least {} propert(ies), found {}", min, count)));
            }
        }
        if let Some(max) = schema.get("maxProperties").and_then(Value::as_u64) {
            if count > max {
                out.push(Violation::new(path, format!("expected at most {} propert(ies), found {}", max, count)));
            }
        }

        self.check_dependencies(schema, fields, path, out);

        if let Some(names) = schema.get("propertyNames") {
            for name in fields.keys() {
                let mut scratch = Vec::new();
                self.check(names, &Value::String(name.clone()), path, &mut scratch);
                if !scratch.is_empty() {
                    out.push(Violation::new(path, format!("property name '{}' is not allowed", name)));
                }
            }
        }

        let properties = schema.get("properties").and_then(Value::as_object);
        let pattern_properties = schema.get("patternProperties").and_then(Value::as_object);

        for (name, value) in fields {
            let child = child_path(path, name);
            let mut matched = false;

            if let Some(sub) = properties.and_then(|p| p.get(name)) {
                matched = true;
                self.check(sub, value, &child, out);
            }

            for (pattern, sub) in pattern_properties.into_iter().flatten() {
                if self.patterns.get(pattern).is_some_and(|re| re.is_match(name)) {
                    matched = true;
                    self.check(sub, value, &child, out);
                }
            }

            if matched {
                continue;
            }
            match schema.get("additionalProperties") {
                Some(Value::Bool(false)) => out.push(Violation::new(
                    path,
                    format!("additional property '{}' is not allowed", name),
                )),
                Some(sub @ Value::Object(_)) => self.check(sub, value, &child, out),
                _ => {}
            }
        }
    }

    fn check_dependencies(
        &self,
        schema: &Map<String, Value>,
        fields: &Map<String, Value>,
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        for keyword in ["dependencies", "dependentRequired", "dependentSchemas"] {
            let Some(dependencies) = schema.get(keyword).and_then(Value::as_object) else {
                continue;
            };
            for (trigger, dependency) in dependencies {
                if !fields.contains_key(trigger) {
                    continue;
                }
                match dependency {
                    Value::Array(names) => {
                        for name in names.iter().filter_map(Value::as_str) {
                            if !fields.contains_key(name) {
                                out.push(Violation::new(
                                    path,
                                    format!("'{}' is required when '{}' is present", name, trigger),
                                ));
                            }
                        }
                    }
                    sub => self.check(sub, &Value::Object(fields.clone()), path, out),
                }
            }
        }
    }

    fn check_array(
        &self,
        schema: &Map<String, Value>,
        items: &[Value],
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        if let Some(min) = schema.get("minItems").and_then(Value::as_u64) {
            if (items.len() as u64) < min {
                out.push(Violation::new(path, format!("expected at least {} item(s), found {}", min, items.len())));
            }
        }
        if let Some(max) = schema.get("maxItems").and_then(Value::as_u64) {
            if (items.len() as u64) > max {
                out.push(Violation::new(path, format!("expected at most {} item(s), found {}", max, items.len())));
            }
        }

        if schema.get("uniqueItems") == Some(&Value::Bool(true)) {
            'outer: for (i, a) in items.iter().enumerate() {
                for (j, b) in items.iter().enumerate().skip(i + 1) {
                    if json_equal(a, b) {
                        out.push(Violation::new(
                            path,
                            format!("items {} and {} are equal; items must be unique", i, j),
                        ));
                        break 'outer;
                    }
                }
            }
        }

        match schema.get("items") {
            Some(Value::Array(tuple)) => {
                for (index, (item, sub)) in items.iter().zip(tuple).enumerate() {
                    self.check(sub, item, &child_path(path, &index.to_string()), out);
                }
                if let Some(extra) = schema.get("additionalItems") {
                    for (index, item) in items.iter().enumerate().skip(tuple.len()) {
                        self.check(extra, item, &child_path(path, &index.to_string()), out);
                    }
                }
            }
            Some(item_schema) => {
                for (index, item) in items.iter().enumerate() {
                    self.check(item_schema, item, &child_path(path, &index.to_string()), out);
                }
            }
            None => {}
        }

        if let Some(contains) = schema.get("contains") {
            if !items.iter().any(|item| self.is_valid(contains, item)) {
                out.push(Violation::new(path, "no item matches the 'contains' schema"));
            }
        }
    }

    fn check_string(&self, schema: &Map<String, Value>, s: &str, path: &str, out: &mut Vec<Violation>) {
        let len = s.chars().count() as u64;
        if let Some(min) = schema.get("minLength").and_then(Value::as_u64) {
            if len < min {
                out.push(Violation::new(path, format!("'{}' is shorter than {}", s, min)));
            }
        }
        if let Some(max) = schema.get("maxLength").and_then(Value::as_u64) {
            if len > max {
                out.push(Violation::new(path, format!("'{}' is longer than {}", s, max)));
            }
        }
        if let Some(pattern) = schema.get("pattern").and_then(Value::as_str) {
            if let Some(re) = self.patterns.get(pattern) {
                if !re.is_match(s) {
                    out.push(Violation::new(path, format!("'{}' does not match '{}'", s, pattern)));
                }
            }
        }
    }

    fn check_combinators(
        &self,
        schema: &Map<String, Value>,
        instance: &Value,
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        if let Some(Value::Array(all)) = schema.get("allOf") {
            for sub in all {
                self.check(sub, instance, path, out);
            }
        }

        if let Some(Value::Array(any)) = schema.get("anyOf") {
            if !any.iter().any(|sub| self.is_valid(sub, instance)) {
                out.push(Violation::new(path, "value does not match any allowed schema"));
            }
        }

        if let Some(Value::Array(one)) = schema.get("oneOf") {
            let matched = one.iter().filter(|sub| self.is_valid(sub, instance)).count();
            if matched != 1 {
                out.push(Violation::new(
                    path,
                    format!("value matches {} schemas, expected exactly one", matched),
                ));
            }
        }

        if let Some(not) = schema.get("not") {
            if self.is_valid(not, instance) {
                out.push(Violation::new(path, format!("{} must not match {}", instance, not)));
            }
        }
    }

    fn check_conditional(
        &self,
        schema: &Map<String, Value>,
        instance: &Value,
        path: &str,
        out: &mut Vec<Violation>,
    ) {
        let Some(condition) = schema.get("if") else {
            return;
        };
        let branch = if self.is_valid(condition, instance) {
            schema.get("then")
        } else {
            schema.get("else")
        };
        if let Some(branch) = branch {
            self.check(branch, instance, path, out);
        }
    }

    fn is_valid(&self, schema: &Value, instance: &Value) -> bool {
        let mut scratch = Vec::new();
        self.check(schema, instance, "", &mut scratch);
        scratch.is_empty()
    }

    fn resolve(&self, reference: &str) -> Option<&Value> {
        match reference {
            "#" => Some(&self.root),
            r => r.strip_prefix('#').and_then(|pointer| self.root.pointer(pointer)),
        }
    }
}

impl SchemaValidator for JsonSchema {
    fn validate(&self, instance: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.check(&self.root, instance, "", &mut violations);
        violations
    }
}

fn check_number(schema: &Map<String, Value>, x: f64, path: &str, out: &mut Vec<Violation>) {
    let bound = |key: &str| schema.get(key).and_then(Value::as_f64);
    // Draft 4 spells exclusive bounds as booleans modifying minimum/maximum.
    let exclusive = |key: &str| schema.get(key) == Some(&Value::Bool(true));

    if let Some(min) = bound("minimum") {
        if exclusive("exclusiveMinimum") {
            if x <= min {
                out.push(Violation::new(path, format!("{} must be greater than {}", x, min)));
            }
        } else if x < min {
            out.push(Violation::new(path, format!("{} is less than the minimum of {}", x, min)));
        }
    }
    if let Some(max) = bound("maximum") {
        if exclusive("exclusiveMaximum") {
            if x >= max {
                out.push(Violation::new(path, format!("{} must be less than {}", x, max)));
            }
        } else if x > max {
            out.push(Violation::new(path, format!("{} is greater than the maximum of {}", x, max)));
        }
    }
    if let Some(min) = bound("exclusiveMinimum") {
        if x <= min {
            out.push(Violation::new(path, format!("{} must be greater than {}", x, min)));
        }
    }
    if let Some(max) = bound("exclusiveMaximum") {
        if x >= max {
            out.push(Violation::new(path, format!("{} must be less than {}", x, max)));
        }
    }
    if let Some(step) = bound("multipleOf").filter(|s| *s > 0.0) {
        let quotient = x / step;
        if (quotient - quotient.round()).abs() > 1e-9 {
            out.push(Violation::new(path, format!("{} is not a multiple of {}", x, step)));
        }
    }
}

fn type_allows(expected: &Value, instance: &Value) -> bool {
    match expected {
        Value::String(name) => type_matches(name, instance),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| type_matches(name, instance)),
        _ => true,
    }
}

fn type_matches(name: &str, instance: &Value) -> bool {
    match name {
        "null" => instance.is_null(),
        "boolean" => instance.is_boolean(),
        "object" => instance.is_object(),
        "array" => instance.is_array(),
        "string" => instance.is_string(),
        "number" => instance.is_number(),
        "integer" => match instance {
            Value::Number(n) => {
                n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            _ => false,
        },
        _ => true,
    }
}

/// JSON equality where numbers compare by value (`1` equals `1.0`).
fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Append a JSON-pointer segment, escaping `~` and `/`.
fn child_path(path: &str, segment: &str) -> String {
    format!("{}/{}", path, segment.replace('~', "~0").replace('/', "~1"))
}

fn compile_regex(pattern: &str, patterns: &mut HashMap<String, Regex>) -> Result<()> {
    if !patterns.contains_key(pattern) {
        patterns.insert(pattern.to_string(), Regex::new(pattern)?);
    }
    Ok(())
}

/// Check that `schema` only uses supported keywords, compiling its regexes.
///
/// `location` is the schema's own JSON pointer, used in error messages.
fn compile(schema: &Value, location: &str, patterns: &mut HashMap<String, Regex>) -> Result<()> {
    let map = match schema {
        Value::Bool(_) => return Ok(()),
        Value::Object(map) => map,
        other => {
            return Err(GoldStdError::Schema(format!(
                "subschema at {} must be an object or boolean, found {}",
                location, other
            )))
        }
    };

    for (keyword, value) in map {
        let here = child_path(location, keyword);
        match keyword.as_str() {
            k if ANNOTATIONS.contains(&k) || LEAF_ASSERTIONS.contains(&k) => {}
            "pattern" => {
                if let Value::String(p) = value {
                    compile_regex(p, patterns)?;
                }
            }
            "properties" | "definitions" | "$defs" | "dependentSchemas" => {
                for (name, sub) in value.as_object().into_iter().flatten() {
                    compile(sub, &child_path(&here, name), patterns)?;
                }
            }
            "patternProperties" => {
                for (pattern, sub) in value.as_object().into_iter().flatten() {
                    compile_regex(pattern, patterns)?;
                    compile(sub, &child_path(&here, pattern), patterns)?;
                }
            }
            "dependencies" => {
                for (name, dependency) in value.as_object().into_iter().flatten() {
                    if !dependency.is_array() {
                        compile(dependency, &child_path(&here, name), patterns)?;
                    }
                }
            }
            "items" | "allOf" | "anyOf" | "oneOf" if value.is_array() => {
                for (index, sub) in value.as_array().into_iter().flatten().enumerate() {
                    compile(sub, &child_path(&here, &index.to_string()), patterns)?;
                }
            }
            "allOf" | "anyOf" | "oneOf" => {
                return Err(GoldStdError::Schema(format!("'{}' at {} must be an array", keyword, location)))
            }
            "items" | "additionalProperties" | "additionalItems" | "contains" | "propertyNames"
            | "not" | "if" | "then" | "else" => compile(value, &here, patterns)?,
            other => {
                return Err(GoldStdError::Schema(format!(
                    "unsupported keyword '{}' at {}",
                    other, location
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn locus_schema() -> JsonSchema {
        JsonSchema::new(json!({
            "type": "object",
            "required": ["chromosome", "position"],
            "additionalProperties": false,
            "properties": {
                "chromosome": {"type": "string", "pattern": "^([1-9]|1[0-9]|2[0-2]|X|Y|MT)$"},
                "position": {"type": "integer", "minimum": 1}
            }
        }))
        .unwrap()
    }

    fn schema(value: Value) -> JsonSchema {
        JsonSchema::new(value).unwrap()
    }

    #[test]
    fn test_valid_instance_has_no_violations() {
        let violations = locus_schema().validate(&json!({"chromosome": "19", "position": 44908822}));
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn test_missing_required_property() {
        let violations = locus_schema().validate(&json!({"chromosome": "19"}));
        assert_eq!(violations, vec![Violation::new("", "'position' is a required property")]);
    }

    #[test]
    fn test_type_and_range_violations_carry_paths() {
        let violations = locus_schema().validate(&json!({"chromosome": 19, "position": 0}));
        let paths: Vec<&str> = violations.iter().map(|v| v.instance_path.as_str()).collect();
        assert_eq!(paths, vec!["/chromosome", "/position"]);
    }

    #[test]
    fn test_pattern_violation() {
        let violations = locus_schema().validate(&json!({"chromosome": "chr19", "position": 5}));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("does not match"));
    }

    #[test]
    fn test_additional_property_rejected() {
        let violations = locus_schema().validate(&json!({"chromosome": "1", "position": 5, "build": 38}));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'build'"));
    }

    #[test]
    fn test_enum_in_array_items() {
        let schema = schema(json!({
            "type": "array",
            "minItems": 1,
            "items": {
                "type": "object",
                "properties": {"confidence": {"enum": ["High", "Low"]}}
            }
        }));
        assert!(schema.validate(&json!([{"confidence": "High"}])).is_empty());

        let violations = schema.validate(&json!([{"confidence": "High"}, {"confidence": "Medium"}]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "/1/confidence");

        assert_eq!(schema.validate(&json!([])).len(), 1);
    }

    #[test]
    fn test_local_ref_and_nullable_type() {
        let schema = schema(json!({
            "definitions": {"locus": {"type": "object", "required": ["position"]}},
            "type": "object",
            "properties": {
                "locus_GRCh37": {"anyOf": [{"$ref": "#/definitions/locus"}, {"type": "null"}]},
                "rsid": {"type": ["string", "null"]}
            }
        }));
        assert!(schema.validate(&json!({"locus_GRCh37": null, "rsid": null})).is_empty());
        assert!(schema.validate(&json!({"locus_GRCh37": {"position": 1}})).is_empty());
        assert_eq!(schema.validate(&json!({"locus_GRCh37": {}})).len(), 1);
        assert_eq!(schema.validate(&json!({"rsid": 7})).len(), 1);
    }

    #[test]
    fn test_one_of_requires_exactly_one_match() {
        let schema = schema(json!({"oneOf": [{"type": "integer"}, {"type": "number"}]}));
        assert_eq!(schema.validate(&json!(1)).len(), 1);
        assert!(schema.validate(&json!(1.5)).is_empty());
    }

    #[test]
    fn test_not_rejects_matching_instance() {
        let schema = schema(json!({"not": {"type": "string"}}));
        assert_eq!(schema.validate(&json!("x")).len(), 1);
        assert!(schema.validate(&json!(5)).is_empty());
    }

    #[test]
    fn test_unique_items() {
        let schema = schema(json!({"type": "array", "uniqueItems": true}));
        assert_eq!(schema.validate(&json!([1, 1])).len(), 1);
        assert_eq!(schema.validate(&json!([1, 1.0])).len(), 1);
        assert_eq!(schema.validate(&json!([{"a": [1]}, {"a": [1]}])).len(), 1);
        assert!(schema.validate(&json!([1, "1", [1]])).is_empty());
    }

    #[test]
    fn test_pattern_properties_satisfy_additional_properties() {
        let schema = schema(json!({
            "type": "object",
            "patternProperties": {"^rs": {"type": "integer"}},
            "additionalProperties": false
        }));
        assert!(schema.validate(&json!({"rs1": 5})).is_empty());

        let violations = schema.validate(&json!({"rs1": "x"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "/rs1");

        let violations = schema.validate(&json!({"gene": 1}));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'gene'"));
    }

    #[test]
    fn test_min_and_max_properties() {
        let schema = schema(json!({"minProperties": 1, "maxProperties": 2}));
        assert_eq!(schema.validate(&json!({})).len(), 1);
        assert!(schema.validate(&json!({"a": 1})).is_empty());
        assert_eq!(schema.validate(&json!({"a": 1, "b": 2, "c": 3})).len(), 1);
    }

    #[test]
    fn test_dependencies_list_and_schema_forms() {
        let schema = schema(json!({
            "dependencies": {
                "locus_GRCh37": ["rsid"],
                "gene_id": {"required": ["gene_symbol"]}
            }
        }));
        assert!(schema.validate(&json!({"rsid": "rs1"})).is_empty());
        assert_eq!(schema.validate(&json!({"locus_GRCh37": {}})).len(), 1);
        assert_eq!(schema.validate(&json!({"gene_id": "ENSG1"})).len(), 1);
        assert!(schema.validate(&json!({"gene_id": "ENSG1", "gene_symbol": "APOE"})).is_empty());
    }

    #[test]
    fn test_dependent_required_and_schemas() {
        let schema = schema(json!({
            "dependentRequired": {"a": ["b"]},
            "dependentSchemas": {"c": {"properties": {"d": {"type": "string"}}}}
        }));
        assert_eq!(schema.validate(&json!({"a": 1})).len(), 1);
        assert_eq!(schema.validate(&json!({"c": 1, "d": 2})).len(), 1);
        assert!(schema.validate(&json!({"a": 1, "b": 2, "c": 1, "d": "x"})).is_empty());
    }

    #[test]
    fn test_if_then_else() {
        let schema = schema(json!({
            "if": {"required": ["a"]},
            "then": {"required": ["b"]},
            "else": {"required": ["c"]}
        }));
        assert_eq!(schema.validate(&json!({"a": 1})).len(), 1);
        assert!(schema.validate(&json!({"a": 1, "b": 2})).is_empty());
        assert_eq!(schema.validate(&json!({})).len(), 1);
        assert!(schema.validate(&json!({"c": 3})).is_empty());
    }

    #[test]
    fn test_tuple_items_and_additional_items() {
        let schema = schema(json!({
            "items": [{"type": "string"}, {"type": "integer"}],
            "additionalItems": false
        }));
        assert!(schema.validate(&json!(["19", 100])).is_empty());
        assert_eq!(schema.validate(&json!([19, 100]))[0].instance_path, "/0");
        assert_eq!(schema.validate(&json!(["19", 100, "extra"]))[0].instance_path, "/2");
    }

    #[test]
    fn test_contains_and_property_names() {
        let schema = schema(json!({"contains": {"const": "High"}}));
        assert!(schema.validate(&json!(["Low", "High"])).is_empty());
        assert_eq!(schema.validate(&json!(["Low"])).len(), 1);

        let schema = self::schema(json!({"propertyNames": {"pattern": "^[a-z_]+$"}}));
        assert!(schema.validate(&json!({"gene_id": 1})).is_empty());
        assert_eq!(schema.validate(&json!({"GeneId": 1})).len(), 1);
    }

    #[test]
    fn test_multiple_of_and_draft4_exclusive_bounds() {
        let schema = schema(json!({"multipleOf": 0.5}));
        assert!(schema.validate(&json!(2.5)).is_empty());
        assert_eq!(schema.validate(&json!(2.3)).len(), 1);

        let schema = self::schema(json!({"minimum": 1, "exclusiveMinimum": true}));
        assert_eq!(schema.validate(&json!(1)).len(), 1);
        assert!(schema.validate(&json!(2)).is_empty());
    }

    #[test]
    fn test_annotations_are_accepted() {
        let schema = schema(json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Gold standard",
            "description": "One curated variant-gene link",
            "properties": {"date": {"type": "string", "format": "date", "default": ""}}
        }));
        assert!(schema.validate(&json!({"date": "2019-01-01"})).is_empty());
    }

    #[test]
    fn test_unsupported_keyword_is_rejected() {
        let err = JsonSchema::new(json!({
            "properties": {"rsid": {"type": "string", "unevaluatedProperties": false}}
        }))
        .unwrap_err();
        match err {
            GoldStdError::Schema(message) => {
                assert!(message.contains("unevaluatedProperties"));
                assert!(message.contains("#/properties/rsid"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_property_named_like_keyword_is_not_a_keyword() {
        let schema = schema(json!({"properties": {"pattern": {"type": "string"}, "not": {}}}));
        assert!(schema.validate(&json!({"pattern": "x", "not": 1})).is_empty());
    }

    #[test]
    fn test_invalid_patterns_are_reported_at_construction() {
        assert!(JsonSchema::new(json!({"pattern": "("})).is_err());
        assert!(JsonSchema::new(json!({"patternProperties": {"(": {}}})).is_err());
    }

    #[test]
    fn test_child_path_escapes_pointer_characters() {
        assert_eq!(child_path("", "a/b"), "/a~1b");
        assert_eq!(child_path("/x", "m~n"), "/x/m~0n");
    }
}
