//! Pairwise Pearson correlation.

use polars::prelude::cov::pearson_corr;
use polars::prelude::{ChunkAgg, ChunkFilter, Float64Chunked};

use flow_model::{CorrelationPair, round_to};

/// Pairs at or below this absolute correlation are not reported.
pub const CORRELATION_THRESHOLD: f64 = 0.7;

fn is_constant(values: &Float64Chunked) -> bool {
    values.min() == values.max()
}

/// Pearson r over rows where both values are present.
///
/// `None` when fewer than two complete rows remain or either side has zero
/// variance.
pub fn pearson(xs: &Float64Chunked, ys: &Float64Chunked) -> Option<f64> {
    let complete = xs.is_not_null() & ys.is_not_null();
    let xs = xs.filter(&complete).ok()?;
    let ys = ys.filter(&complete).ok()?;
    if xs.len() < 2 || is_constant(&xs) || is_constant(&ys) {
        return None;
    }
    let r = pearson_corr(&xs, &ys)?;
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Strongly correlated pairs `(i, j > i)` in column order.
pub fn correlations(columns: &[(String, Float64Chunked)]) -> Vec<CorrelationPair> {
    let mut pairs = Vec::new();
    for (i, (name_i, values_i)) in columns.iter().enumerate() {
        for (name_j, values_j) in &columns[i + 1..] {
            let Some(r) = pearson(values_i, values_j) else {
                continue;
            };
            if r.abs() > CORRELATION_THRESHOLD {
                pairs.push(CorrelationPair {
                    column1: name_i.clone(),
                    column2: name_j.clone(),
                    correlation: round_to(r, 2),
                });
            }
        }
    }
    pairs
}
