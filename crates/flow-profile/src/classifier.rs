//! Column classifier.
//!
//! Decides which columns are genuine measurements worth summarizing. Name
//! matching is plain substring containment on the lowercased name, so a
//! column like `Validity` is excluded because it contains `id`.

use polars::prelude::DataFrame;
use tracing::trace;

use crate::column::{ColumnAccessor, ValueKind};
use crate::error::AnalyzerError;

const BUSINESS_ID_PATTERNS: [&str; 12] = [
    "customer_id",
    "product_id",
    "order_id",
    "transaction_id",
    "account_id",
    "user_id",
    "employee_id",
    "vendor_id",
    "invoice_id",
    "payment_id",
    "shipment_id",
    "tracking_id",
];

const TECHNICAL_PATTERNS: [&str; 20] = [
    "id",
    "code",
    "number",
    "num",
    "identifier",
    "reference",
    "zip",
    "postal",
    "year",
    "month",
    "day",
    "phone",
    "mobile",
    "fax",
    "index",
    "sequence",
    "seq",
    "version",
    "revision",
    "batch",
];

/// Returns the first exclusion pattern found in `name`, if any.
fn excluded_by_name(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    BUSINESS_ID_PATTERNS
        .iter()
        .chain(TECHNICAL_PATTERNS.iter())
        .find(|pattern| lower.contains(*pattern))
        .copied()
}

/// Whether `column` should get descriptive statistics, outliers and correlation.
pub fn is_analyzable_numeric(column: &str, frame: &DataFrame) -> Result<bool, AnalyzerError> {
    if let Some(pattern) = excluded_by_name(column) {
        trace!(column, pattern, "excluded by name");
        return Ok(false);
    }

    let view = ColumnAccessor::new(frame).view(column)?;
    if view.distinct_non_null()? == frame.height() {
        trace!(column, "excluded as all-distinct");
        return Ok(false);
    }
    Ok(view.kind() == ValueKind::Numeric)
}

/// Eligible columns in frame order.
pub fn numeric_columns(frame: &DataFrame) -> Result<Vec<String>, AnalyzerError> {
    let mut eligible = Vec::new();
    for name in ColumnAccessor::new(frame).names() {
        if is_analyzable_numeric(&name, frame)? {
            eligible.push(name);
        }
    }
    Ok(eligible)
}

/// Name heuristic for monetary columns.
pub fn is_currency_column(name: &str, indicators: &[String]) -> bool {
    let lower = name.to_lowercase();
    indicators
        .iter()
        .any(|indicator| lower.contains(&indicator.to_lowercase()))
}
