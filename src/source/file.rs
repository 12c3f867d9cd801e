//! File-based catalog source.
//!
//! Reads a CSV or JSON catalog from disk, choosing the reader by extension.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{records, CatalogSource};
use crate::data::RationTable;
use crate::error::LoadError;

/// A source that reads the ration catalog from a `.csv` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<BufReader<File>, LoadError> {
        File::open(&self.path).map(BufReader::new).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<RationTable, LoadError> {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let rows = match ext.as_str() {
            "csv" => records::read_csv(self.open()?)?,
            "json" => records::read_json(self.open()?)?,
            _ => return Err(LoadError::UnsupportedFormat(ext)),
        };

        let table = RationTable::from_raw_rows(rows, self.description.clone())?;
        tracing::info!(path = %self.path.display(), items = table.len(), "loaded ration catalog");
        Ok(table)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
