//! Error types for loading a ration catalog.
//!
//! Loading is the only fallible step of the data provider: once a
//! [`RationTable`](crate::data::RationTable) exists, filtering and rendering
//! cannot fail. Every variant names the offending row or column so the user
//! can fix the source file.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a catalog could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format `{0}` (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: missing value for `{field}`")]
    MissingValue { row: usize, field: &'static str },

    #[error("row {row}: `{field}` is not a finite number: {value:?}")]
    NotANumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: calories must not be negative, got {value}")]
    NegativeCalories { row: usize, value: f64 },

    #[error("row {row}: grams must be greater than zero, got {value}")]
    NonPositiveGrams { row: usize, value: f64 },

    #[error("catalog contains no items")]
    Empty,
}

impl LoadError {
    /// The 1-based data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::MissingValue { row, .. }
            | LoadError::NotANumber { row, .. }
            | LoadError::NegativeCalories { row, .. }
            | LoadError::NonPositiveGrams { row, .. } => Some(*row),
            _ => None,
        }
    }
}
