//! Filling in a sentinel variant's missing assembly locus.

use std::sync::Arc;

use log::{debug, warn};

use crate::error::{GoldStdError, Result};
use crate::record::Record;

use super::assembly::{Assembly, Locus};
use super::mapper::CoordinateMapper;

/// Mappers for each liftover direction.
#[derive(Clone, Default)]
pub struct AssemblyMappers {
    grch37_to_38: Option<Arc<dyn CoordinateMapper>>,
    grch38_to_37: Option<Arc<dyn CoordinateMapper>>,
}

impl AssemblyMappers {
    /// Create an empty set of mappers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GRCh37 → GRCh38 mapper.
    pub fn with_grch37_to_38(mut self, mapper: impl CoordinateMapper + 'static) -> Self {
        self.grch37_to_38 = Some(Arc::new(mapper));
        self
    }

    /// Set the GRCh38 → GRCh37 mapper.
    pub fn with_grch38_to_37(mut self, mapper: impl CoordinateMapper + 'static) -> Self {
        self.grch38_to_37 = Some(Arc::new(mapper));
        self
    }

    /// Mapper lifting positions off `from`.
    pub fn from_assembly(&self, from: Assembly) -> Option<&dyn CoordinateMapper> {
        match from {
            Assembly::GRCh37 => self.grch37_to_38.as_deref(),
            Assembly::GRCh38 => self.grch38_to_37.as_deref(),
        }
    }
}

impl std::fmt::Debug for AssemblyMappers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyMappers")
            .field("grch37_to_38", &self.grch37_to_38.is_some())
            .field("grch38_to_37", &self.grch38_to_37.is_some())
            .finish()
    }
}

/// What [`fill_in_assemblies`] did to a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiftoverOutcome {
    /// Both or neither locus present; nothing to fill.
    Unchanged,
    /// The missing locus was added.
    Lifted { from: Assembly, to: Assembly },
    /// The source position has no counterpart on the target assembly.
    Unmapped { from: Assembly, to: Assembly },
    /// No mapper is configured for the needed direction.
    NoMapper { from: Assembly, to: Assembly },
}

/// Add the missing assembly locus to a sentinel-variant record.
///
/// When exactly one of `locus_GRCh37` / `locus_GRCh38` is present and
/// non-null, its position is lifted to the other assembly and the first
/// candidate is stored. Record positions are 1-based; mappers see 0-based
/// positions. A position that cannot be lifted leaves the field absent.
pub fn fill_in_assemblies(variant: &mut Record, mappers: &AssemblyMappers) -> Result<LiftoverOutcome> {
    let from = match (has_locus(variant, Assembly::GRCh37), has_locus(variant, Assembly::GRCh38)) {
        (true, false) => Assembly::GRCh37,
        (false, true) => Assembly::GRCh38,
        _ => return Ok(LiftoverOutcome::Unchanged),
    };
    let to = from.other();
    let rsid = variant.get("rsid").map(|v| v.to_string()).unwrap_or_else(|| "null".to_string());

    let locus = variant
        .get(from.locus_field())
        .and_then(Locus::from_value)
        .ok_or_else(|| {
            GoldStdError::Liftover(format!("{} has a malformed {}", rsid, from.locus_field()))
        })?;

    let Some(mapper) = mappers.from_assembly(from) else {
        warn!("No {} to {} mapper configured; {} left without {}", from, to, rsid, to.locus_field());
        return Ok(LiftoverOutcome::NoMapper { from, to });
    };

    let candidates = mapper.convert(&locus.chromosome, locus.position - 1);
    match candidates.into_iter().next() {
        Some((chromosome, position)) => {
            let position = position.checked_add(1).ok_or_else(|| {
                GoldStdError::Liftover(format!(
                    "{} lifts to an out-of-range {} position on {}",
                    rsid, to, chromosome
                ))
            })?;
            let lifted = Locus::new(chromosome, position);
            debug!("{}: {} {} -> {} {}", rsid, from, locus, to, lifted);
            variant.insert(to.locus_field().to_string(), lifted.to_value());
            Ok(LiftoverOutcome::Lifted { from, to })
        }
        None => {
            warn!("No locus found in {} for {} (\"{}\", {})", to, rsid, locus.chromosome, locus.position);
            Ok(LiftoverOutcome::Unmapped { from, to })
        }
    }
}

fn has_locus(variant: &Record, assembly: Assembly) -> bool {
    variant
        .get(assembly.locus_field())
        .is_some_and(|v| !v.is_null())
}
