//! Typed column access for the analyzers.
//!
//! Analyzers never look at Polars dtypes directly. They ask a
//! [`ColumnAccessor`] for a [`ColumnView`], check its [`ValueKind`], and read
//! cells as [`CellValue`]s.
//!
//! # Example
//!
//! ```ignore
//! let accessor = ColumnAccessor::new(&df);
//! let view = accessor.view("Amount")?;
//! if view.kind() == ValueKind::Numeric {
//!     let values = view.floats()?;
//! }
//! ```

use polars::prelude::{
    AnyValue, ChunkFillNullValue, ChunkSet, Column, DataFrame, DataType, Float64Chunked,
    PolarsError,
};

use flow_ingest::{any_to_f64, any_to_string};

use crate::error::AnalyzerError;

/// Broad value category of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Numeric,
    Text,
    Date,
    Boolean,
    Unknown,
}

impl ValueKind {
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => ValueKind::Numeric,
            DataType::String => ValueKind::Text,
            DataType::Boolean => ValueKind::Boolean,
            dt if dt.is_temporal() => ValueKind::Date,
            _ => ValueKind::Unknown,
        }
    }
}

/// One cell, converted out of Polars.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
    /// Booleans, dates and anything else, as display text.
    Other(String),
}

impl CellValue {
    pub fn from_any(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => CellValue::Null,
            AnyValue::String(s) => CellValue::Text(s.to_string()),
            AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
            other => match any_to_f64(other.clone()) {
                Some(v) if v.is_nan() => CellValue::Null,
                Some(v) => CellValue::Number(v),
                None => CellValue::Other(any_to_string(other)),
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Column access by name over a borrowed frame.
#[derive(Debug, Clone, Copy)]
pub struct ColumnAccessor<'a> {
    df: &'a DataFrame,
}

impl<'a> ColumnAccessor<'a> {
    #[inline]
    pub fn new(df: &'a DataFrame) -> Self {
        Self { df }
    }

    #[inline]
    pub fn frame(&self) -> &'a DataFrame {
        self.df
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Column names in frame order.
    pub fn names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn view(&self, name: &str) -> Result<ColumnView<'a>, AnalyzerError> {
        let column = self
            .df
            .column(name)
            .map_err(|_| AnalyzerError::ColumnNotFound {
                column: name.to_string(),
            })?;
        Ok(ColumnView {
            name: name.to_string(),
            kind: ValueKind::of(column.dtype()),
            column,
        })
    }
}

/// A single column with its [`ValueKind`].
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    name: String,
    kind: ValueKind,
    column: &'a Column,
}

impl ColumnView<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column.len() == 0
    }

    fn get(&self, idx: usize) -> Result<AnyValue<'_>, AnalyzerError> {
        self.column
            .get(idx)
            .map_err(|e| AnalyzerError::read(&self.name, e))
    }

    /// Every cell in row order.
    pub fn cells(&self) -> Result<Vec<CellValue>, AnalyzerError> {
        (0..self.len())
            .map(|idx| self.get(idx).map(CellValue::from_any))
            .collect()
    }

    pub fn column(&self) -> &Column {
        self.column
    }

    /// Values as `f64` in row order. Nulls, NaNs and unparsable cells are null.
    pub fn floats(&self) -> Result<Float64Chunked, AnalyzerError> {
        let read = |e: PolarsError| AnalyzerError::read(&self.name, e);
        let cast = self.column.cast(&DataType::Float64).map_err(read)?;
        let values = cast.f64().map_err(read)?;
        let nan = values.is_nan().fill_null_with_values(false).map_err(read)?;
        values.set(&nan, None).map_err(read)
    }

    /// Number of distinct non-null values.
    pub fn distinct_non_null(&self) -> Result<usize, AnalyzerError> {
        let distinct = self
            .column
            .n_unique()
            .map_err(|e| AnalyzerError::read(&self.name, e))?;
        Ok(distinct - usize::from(self.column.null_count() > 0))
    }
}
