//! CSV reading utilities.

mod header;
mod reader;

pub use header::{SourceHeaders, normalize_header};
pub use reader::{NULL_TOKENS, SourceEncoding, SourceTable, read_csv_strings, read_source_table};
