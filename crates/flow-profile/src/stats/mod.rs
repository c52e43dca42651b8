//! Numeric analyzers for classifier-eligible columns.

mod correlation;
mod descriptive;
mod outliers;

pub use correlation::{CORRELATION_THRESHOLD, correlations, pearson};
pub use descriptive::{describe, quantile};
pub use outliers::{IQR_MULTIPLIER, iqr_outliers};
