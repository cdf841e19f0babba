//! Filling in sentinel-variant loci across GRCh37 and GRCh38.
//!
//! The mapping itself is delegated to a [`CoordinateMapper`]; this module
//! only decides when a locus is missing and writes the lifted result back.

mod assembly;
mod fill;
mod mapper;

pub use assembly::{Assembly, Locus};
pub use fill::{fill_in_assemblies, AssemblyMappers, LiftoverOutcome};
pub use mapper::{CoordinateMapper, PositionTable};
