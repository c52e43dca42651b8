//! Metadata file loading.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use flow_model::{FlagKind, MetadataRow, MetadataTable};

use crate::csv::read_csv_strings;
use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string;

use super::normalize::{normalize_flag, normalize_metadata};

pub const FILE_NAME_HEADER: &str = "File Name";
pub const COLUMN_NAME_HEADER: &str = "Column Name";

/// Conversion from a normalized metadata frame.
pub trait FromFrame: Sized {
    fn from_frame(df: &DataFrame) -> Result<Self>;
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

fn require_column(df: &DataFrame, name: &str) -> Result<()> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(IngestError::MissingColumn {
            column: name.to_string(),
            path: Default::default(),
        })
    }
}

impl FromFrame for MetadataTable {
    fn from_frame(df: &DataFrame) -> Result<Self> {
        require_column(df, FILE_NAME_HEADER)?;
        require_column(df, COLUMN_NAME_HEADER)?;

        let file_col = df.column(FILE_NAME_HEADER)?;
        let name_col = df.column(COLUMN_NAME_HEADER)?;

        let flags: Vec<FlagKind> = FlagKind::ALL
            .into_iter()
            .filter(|kind| has_column(df, kind.header()))
            .collect();
        let flag_cols = flags
            .iter()
            .map(|kind| Ok((*kind, df.column(kind.header())?)))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let mut row = MetadataRow::new(
                any_to_string(file_col.get(idx)?),
                any_to_string(name_col.get(idx)?),
            );
            for (kind, column) in &flag_cols {
                row.set_flag(
                    *kind,
                    Some(normalize_flag(&any_to_string(column.get(idx)?))),
                );
            }
            rows.push(row);
        }

        Ok(MetadataTable::new(rows, flags))
    }
}

/// Loads and normalizes the schema-master metadata CSV.
pub fn load_metadata(path: &Path) -> Result<MetadataTable> {
    let mut df = read_csv_strings(path)?;
    normalize_metadata(&mut df)?;

    let table = MetadataTable::from_frame(&df).map_err(|err| match err {
        IngestError::MissingColumn { column, .. } => IngestError::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;

    let missing_flags: Vec<&str> = FlagKind::ALL
        .into_iter()
        .filter(|kind| !table.has_flag(*kind))
        .map(FlagKind::header)
        .collect();
    if !missing_flags.is_empty() {
        debug!(?missing_flags, "metadata has no column for some flags");
    }
    info!(
        path = %path.display(),
        rows = table.len(),
        files = table.file_names().len(),
        "loaded metadata"
    );

    Ok(table)
}
