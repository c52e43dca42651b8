//! Data ingestion for IQVIA Flow.
//!
//! This crate loads the inputs of a profiling run into Polars DataFrames and
//! typed metadata.
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 with Windows-1252 fallback, null tokens, header
//!   normalization and duplicate column collapse
//! - **Metadata Loading**: schema-master CSV normalized into a [`MetadataTable`]
//! - **File Discovery**: recursive, sorted listing of CSV files
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use flow_ingest::{list_csv_files, load_metadata, read_source_table};
//!
//! let metadata = load_metadata(Path::new("metadata/master.csv"))?;
//! for path in list_csv_files(Path::new("raw"))? {
//!     let table = read_source_table(&path)?;
//!     println!("{}: {} rows", path.display(), table.total_rows());
//! }
//! ```
//!
//! [`MetadataTable`]: flow_model::MetadataTable

mod csv;
mod discovery;
mod error;
mod hash;
mod metadata;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    NULL_TOKENS, SourceEncoding, SourceHeaders, SourceTable, normalize_header, read_csv_strings,
    read_source_table,
};

// === File Discovery ===
pub use discovery::list_csv_files;

// === Metadata ===
pub use metadata::{
    COLUMN_NAME_HEADER, FILE_NAME_HEADER, FromFrame, load_metadata, normalize_flag,
    normalize_metadata, normalize_whitespace,
};

// === Utilities ===
pub use hash::sha256_hex;
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
