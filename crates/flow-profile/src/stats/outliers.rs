//! IQR outlier detection.

use polars::prelude::{ChunkAgg, ChunkCompareIneq, Float64Chunked};

use flow_model::{OutlierResult, percentage, round_to};

use super::descriptive::quantile;
use crate::error::AnalyzerError;

pub const IQR_MULTIPLIER: f64 = 1.5;

/// Counts values strictly outside `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]`.
///
/// The percentage is taken over `total_rows`, nulls included.
pub fn iqr_outliers(
    column: &str,
    values: &Float64Chunked,
    total_rows: usize,
) -> Result<OutlierResult, AnalyzerError> {
    let q1 = quantile(column, values, 0.25)?;
    let q3 = quantile(column, values, 0.75)?;
    let iqr = q3 - q1;
    let lower = q1 - IQR_MULTIPLIER * iqr;
    let upper = q3 + IQR_MULTIPLIER * iqr;
    let outside = values.lt(lower) | values.gt(upper);
    let count = u64::from(outside.sum().unwrap_or(0));

    Ok(OutlierResult {
        column: column.to_string(),
        count,
        percentage: percentage(count, total_rows as u64),
        lower_bound: round_to(lower, 2),
        upper_bound: round_to(upper, 2),
    })
}
