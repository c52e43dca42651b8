//! Metadata-driven column checks.
//!
//! Each check reads one [`ColumnView`](crate::column::ColumnView) and returns
//! a count, or an [`AnalyzerError`](crate::error::AnalyzerError) the profiler
//! logs before moving on.

mod currency;
mod duplicates;
mod nulls;
mod patterns;

pub use currency::{CurrencyCounts, CurrencyRules, check_currency};
pub use duplicates::{DuplicateSummary, check_duplicates};
pub use nulls::{check_nulls, is_null_like};
pub use patterns::PatternSet;
