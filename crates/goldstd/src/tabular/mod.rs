//! Tabular output of flattened records.

mod table;

pub use table::{Table, TableConfig};
