//! Genome assemblies and the loci recorded against them.

use std::fmt;

use crate::record::{Record, Scalar, Value};

/// Reference-genome assemblies a sentinel variant can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assembly {
    GRCh37,
    GRCh38,
}

impl Assembly {
    /// Name of the record field holding this assembly's locus.
    pub fn locus_field(&self) -> &'static str {
        match self {
            Assembly::GRCh37 => "locus_GRCh37",
            Assembly::GRCh38 => "locus_GRCh38",
        }
    }

    /// The other assembly.
    pub fn other(&self) -> Assembly {
        match self {
            Assembly::GRCh37 => Assembly::GRCh38,
            Assembly::GRCh38 => Assembly::GRCh37,
        }
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assembly::GRCh37 => write!(f, "GRCh37"),
            Assembly::GRCh38 => write!(f, "GRCh38"),
        }
    }
}

/// A 1-based chromosome position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    pub chromosome: String,
    pub position: u64,
}

impl Locus {
    /// Create a locus.
    pub fn new(chromosome: impl Into<String>, position: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            position,
        }
    }

    /// Read a locus from a `{chromosome, position}` record.
    ///
    /// Numeric chromosome names are accepted; positions must be at least 1.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_record()?;
        let chromosome = match record.get("chromosome")?.as_scalar()? {
            Scalar::String(s) => s.clone(),
            Scalar::Number(n) => n.to_string(),
            _ => return None,
        };
        let position = record.get("position")?.as_scalar()?.as_u64()?;
        if position == 0 {
            return None;
        }
        Some(Self::new(chromosome, position))
    }

    /// Render as a `{chromosome, position}` record.
    pub fn to_value(&self) -> Value {
        let mut record = Record::new();
        record.insert("chromosome".to_string(), Value::from(self.chromosome.as_str()));
        record.insert("position".to_string(), Value::from(self.position));
        Value::Record(record)
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chromosome, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locus_from_value() {
        let value = Value::from(json!({"chromosome": "19", "position": 44908822}));
        assert_eq!(Locus::from_value(&value), Some(Locus::new("19", 44908822)));

        let numeric = Value::from(json!({"chromosome": 7, "position": 1}));
        assert_eq!(Locus::from_value(&numeric), Some(Locus::new("7", 1)));
    }

    #[test]
    fn test_malformed_locus() {
        assert_eq!(Locus::from_value(&Value::from(json!({"chromosome": "1"}))), None);
        assert_eq!(Locus::from_value(&Value::from(json!({"chromosome": "1", "position": 0}))), None);
        assert_eq!(Locus::from_value(&Value::from(json!({"chromosome": "1", "position": -5}))), None);
        assert_eq!(Locus::from_value(&Value::from(json!(null))), None);
    }

    #[test]
    fn test_locus_to_value() {
        let value = Locus::new("X", 12).to_value();
        assert_eq!(serde_json::Value::from(value), json!({"chromosome": "X", "position": 12}));
    }

    #[test]
    fn test_assembly_fields() {
        assert_eq!(Assembly::GRCh37.locus_field(), "locus_GRCh37");
        assert_eq!(Assembly::GRCh38.other(), Assembly::GRCh37);
    }
}
