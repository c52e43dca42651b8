//! Statistical results for numeric-eligible columns.

use serde::{Deserialize, Serialize};

/// Descriptive statistics, each value rounded to 2 places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStat {
    pub column: String,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
}

impl DescriptiveStat {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// IQR outlier summary for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    pub column: String,
    pub count: u64,
    pub percentage: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// A strongly correlated column pair (`|r| > 0.7`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column1: String,
    pub column2: String,
    pub correlation: f64,
}
