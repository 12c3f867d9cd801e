//! Catalog sources for the ration table.
//!
//! This module provides a trait-based abstraction over where the catalog
//! comes from: the catalog bundled into the binary or a file on disk.
//! Every source goes through the same row validation, so a table built from
//! either one upholds the same invariants.

mod embedded;
mod file;
pub mod records;

pub use embedded::EmbeddedSource;
pub use file::FileSource;

use std::fmt::Debug;

use crate::data::RationTable;
use crate::error::LoadError;

/// Trait for loading the ration catalog.
///
/// # Example
///
/// ```
/// use ration_optimizer::{CatalogSource, EmbeddedSource};
///
/// let table = EmbeddedSource::new().load().unwrap();
/// println!("Loaded {} items from {}", table.len(), table.source());
/// ```
pub trait CatalogSource: Debug {
    /// Load and validate the full catalog.
    ///
    /// Either every row is valid and a table is returned, or the first
    /// problem is reported; there is no partial result.
    fn load(&self) -> Result<RationTable, LoadError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}

/// Pick a source: the given file, or the bundled catalog when `path` is `None`.
pub fn source_for(path: Option<&std::path::Path>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(EmbeddedSource::new()),
    }
}
