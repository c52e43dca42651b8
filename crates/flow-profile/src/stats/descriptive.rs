//! Descriptive statistics.

use polars::prelude::{ChunkAgg, ChunkQuantile, ChunkVar, Float64Chunked, QuantileMethod};

use flow_model::{DescriptiveStat, round_to};

use crate::error::AnalyzerError;

fn no_values(column: &str) -> AnalyzerError {
    AnalyzerError::NoValues {
        column: column.to_string(),
    }
}

/// Linearly interpolated quantile of the non-null values.
pub fn quantile(column: &str, values: &Float64Chunked, q: f64) -> Result<f64, AnalyzerError> {
    values
        .quantile(q, QuantileMethod::Linear)
        .map_err(|e| AnalyzerError::read(column, e))?
        .ok_or_else(|| no_values(column))
}

/// Summarizes the non-null values of one column, every figure rounded to
/// 2 places. The standard deviation is the population one, and exactly 0
/// for a column of identical values.
pub fn describe(column: &str, values: &Float64Chunked) -> Result<DescriptiveStat, AnalyzerError> {
    let (Some(min), Some(max)) = (values.min(), values.max()) else {
        return Err(no_values(column));
    };
    let mean = values.mean().ok_or_else(|| no_values(column))?;
    let median = values.median().ok_or_else(|| no_values(column))?;
    let std = if min == max {
        0.0
    } else {
        values.std(0).ok_or_else(|| no_values(column))?
    };
    let q1 = quantile(column, values, 0.25)?;
    let q3 = quantile(column, values, 0.75)?;

    Ok(DescriptiveStat {
        column: column.to_string(),
        mean: round_to(mean, 2),
        median: round_to(median, 2),
        std: round_to(std, 2),
        min: round_to(min, 2),
        max: round_to(max, 2),
        q1: round_to(q1, 2),
        q3: round_to(q3, 2),
    })
}
