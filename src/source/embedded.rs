//! The catalog compiled into the binary.

use super::{records, CatalogSource};
use crate::data::RationTable;
use crate::error::LoadError;

/// First Strike Ration menus (2012), bundled at build time.
const FSR_2012_CSV: &str = include_str!("../../data/fsr_2012.csv");

/// A source that reads the bundled First Strike Ration catalog.
///
/// Used when no `--data` path is configured.
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    description: String,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self {
            description: "built-in: First Strike Ration menus 2012".to_string(),
        }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for EmbeddedSource {
    fn load(&self) -> Result<RationTable, LoadError> {
        let rows = records::read_csv(FSR_2012_CSV.as_bytes())?;
        RationTable::from_raw_rows(rows, self.description.clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
