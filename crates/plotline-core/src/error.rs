// File: crates/plotline-core/src/error.rs
// Summary: Typed failures raised at the loader, accessor, scale and bin boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Every way the pipeline can refuse to produce geometry.
///
/// Errors surface at the boundary where the bad value first appears, so a
/// missing field never turns into a NaN pixel coordinate further down.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read dataset '{}'", path.display())]
    DataFetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(String),

    #[error("cannot build a scale for '{field}' over an empty dataset")]
    EmptyDataset { field: String },

    #[error("record {index} has no value for field '{field}'")]
    MissingField { field: String, index: usize },

    #[error("record {index}: field '{field}' is not a {expected}")]
    TypeMismatch {
        field: String,
        index: usize,
        expected: &'static str,
    },

    #[error("record {index}: '{value}' in field '{field}' does not match date format '{format}'")]
    DateParse {
        field: String,
        index: usize,
        value: String,
        format: String,
    },

    #[error("category '{value}' is not in the scale vocabulary")]
    OutOfVocabulary { value: String },

    #[error("value {value} lies outside the bin domain [{lo}, {hi}]")]
    OutOfDomain { value: f64, lo: f64, hi: f64 },

    #[error("invalid domain [{lo}, {hi}]")]
    InvalidDomain { lo: f64, hi: f64 },

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("no accessor named '{0}'")]
    UnknownAccessor(String),

    #[error("unknown color '{0}'")]
    InvalidColor(String),

    #[error("no mark with index {0}")]
    UnknownMark(usize),
}

impl ChartError {
    /// Re-tag a per-record error with the record's position in the dataset.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            ChartError::MissingField { field, .. } => ChartError::MissingField { field, index },
            ChartError::TypeMismatch { field, expected, .. } => {
                ChartError::TypeMismatch { field, index, expected }
            }
            ChartError::DateParse { field, value, format, .. } => {
                ChartError::DateParse { field, index, value, format }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
