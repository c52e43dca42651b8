//! Error types for profiling.

use std::path::PathBuf;
use thiserror::Error;

use flow_ingest::IngestError;

/// Failure of a single analyzer on a single column.
///
/// The profiler logs these and carries on without that metric.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Column has no non-null numeric values to summarize.
    #[error("column '{column}' has no numeric values")]
    NoValues { column: String },

    #[error("failed to read column '{column}': {message}")]
    Read { column: String, message: String },
}

impl AnalyzerError {
    pub(crate) fn read(column: &str, err: polars::prelude::PolarsError) -> Self {
        Self::Read {
            column: column.to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors that stop a whole file from being profiled.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No metadata rows match the file's stem.
    #[error("no metadata found for file '{stem}'")]
    NoMetadata { stem: String },

    #[error("file has no name: {path}")]
    InvalidPath { path: PathBuf },

    /// A configured validation pattern does not compile.
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
