//! CSV file reading with encoding fallback and header normalization.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::hash::sha256_hex;

use super::header::{SourceHeaders, normalize_header, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Cell texts read as null.
pub const NULL_TOKENS: [&str; 6] = ["NA", "NaN", "null", "NULL", "None", ""];

/// Text encoding a source file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Windows-1252, the superset of Latin-1 that browsers and Excel assume.
    Windows1252,
}

impl SourceEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Windows1252 => "Windows-1252",
        }
    }
}

/// A loaded data file: the frame plus what was known about its raw header.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Frame with normalized, de-duplicated column names.
    pub frame: DataFrame,
    pub headers: SourceHeaders,
    pub encoding: SourceEncoding,
    /// Lowercase hex SHA-256 of the file bytes.
    pub sha256: String,
}

impl SourceTable {
    pub fn total_rows(&self) -> usize {
        self.frame.height()
    }

    /// Header count before duplicate columns were dropped.
    pub fn total_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn unique_columns(&self) -> usize {
        self.headers.distinct_len()
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

fn read_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Decodes raw file bytes as UTF-8, falling back to Windows-1252.
///
/// A UTF-8 BOM is stripped. UTF-16 input is rejected.
pub fn decode_source(path: &Path, bytes: &[u8]) -> Result<(String, SourceEncoding)> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok((text.to_string(), SourceEncoding::Utf8)),
        Err(err) => {
            debug!(
                path = %path.display(),
                valid_up_to = err.valid_up_to(),
                "not valid UTF-8, decoding as Windows-1252"
            );
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok((text.into_owned(), SourceEncoding::Windows1252))
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    check_file_size(path)?;
    std::fs::read(path).map_err(|e| read_error(path, e))
}

fn parse_frame(path: &Path, text: String, infer_schema_length: Option<usize>) -> Result<DataFrame> {
    let null_values: Vec<PlSmallStr> = NULL_TOKENS.iter().map(|token| (*token).into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumns(null_values.clone())))
        })
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn header_line(path: &Path, text: &str) -> Result<SourceHeaders> {
    let line = text
        .lines()
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| IngestError::EmptyCsv {
            path: path.to_path_buf(),
        })?;
    Ok(SourceHeaders::new(parse_csv_line(line)))
}

/// Renames columns to their normalized header and keeps the first of any
/// columns that normalize to the same name.
fn collapse_duplicate_columns(
    path: &Path,
    df: DataFrame,
    headers: &SourceHeaders,
) -> Result<DataFrame> {
    let names: Vec<String> = if headers.len() == df.width() {
        headers.normalized()
    } else {
        warn!(
            path = %path.display(),
            header_fields = headers.len(),
            parsed_columns = df.width(),
            "header row and parsed frame disagree, using parsed names"
        );
        df.get_column_names()
            .iter()
            .map(|name| normalize_header(name.as_str()))
            .collect()
    };

    let mut seen = BTreeSet::new();
    let mut columns = Vec::with_capacity(names.len());
    for (column, name) in df.take_columns().into_iter().zip(names) {
        if seen.insert(name.clone()) {
            columns.push(column.with_name(name.into()));
        } else {
            debug!(path = %path.display(), column = %name, "dropping duplicate column");
        }
    }
    Ok(DataFrame::new(columns)?)
}

/// Reads a data file for profiling.
///
/// Types are inferred over the whole file. Null tokens from [`NULL_TOKENS`]
/// become nulls.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let bytes = read_bytes(path)?;
    let sha256 = sha256_hex(&bytes);
    let (text, encoding) = decode_source(path, &bytes)?;
    let headers = header_line(path, &text)?;
    let df = parse_frame(path, text, None)?;
    let frame = collapse_duplicate_columns(path, df, &headers)?;

    debug!(
        path = %path.display(),
        encoding = encoding.as_str(),
        rows = frame.height(),
        columns = frame.width(),
        "loaded source table"
    );

    Ok(SourceTable {
        frame,
        headers,
        encoding,
        sha256,
    })
}

/// Reads a CSV with every column kept as text.
pub fn read_csv_strings(path: &Path) -> Result<DataFrame> {
    let bytes = read_bytes(path)?;
    let (text, _) = decode_source(path, &bytes)?;
    header_line(path, &text)?;
    parse_frame(path, text, Some(0))
}
