//! Results of the per-column metadata checks.

use serde::{Deserialize, Serialize};

use crate::metadata::FlagKind;
use crate::numeric::percentage;

/// Check applied to columns carrying a metadata flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Mandatory,
    Unique,
    Sensitive,
    Encrypted,
}

impl CheckKind {
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Mandatory,
        CheckKind::Unique,
        CheckKind::Sensitive,
        CheckKind::Encrypted,
    ];

    /// Metadata flag that selects the columns for this check.
    pub fn flag(self) -> FlagKind {
        match self {
            CheckKind::Mandatory => FlagKind::Mandatory,
            CheckKind::Unique => FlagKind::Unique,
            CheckKind::Sensitive => FlagKind::Sensitive,
            CheckKind::Encrypted => FlagKind::Encrypted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Mandatory => "mandatory",
            CheckKind::Unique => "unique",
            CheckKind::Sensitive => "sensitive",
            CheckKind::Encrypted => "encrypted",
        }
    }
}

/// Outcome of one check on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStat {
    pub column: String,
    pub count: u64,
    /// `count / total_records * 100`, rounded to 2 places; 0 for an empty file.
    pub percentage: f64,
    pub total_records: u64,
    pub detail: String,
}

impl ColumnStat {
    pub fn new(
        column: impl Into<String>,
        count: u64,
        total_records: u64,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            count,
            percentage: percentage(count, total_records),
            total_records,
            detail: detail.into(),
        }
    }
}

/// Currency format breakdown for one currency column.
///
/// Every non-null value lands in exactly one bucket; percentages are taken
/// over the total row count, nulls included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyStat {
    pub column: String,
    pub currency: String,
    pub invalid_format: u64,
    pub negative_values: u64,
    pub zero_values: u64,
    pub valid_values: u64,
    pub total_records: u64,
    pub invalid_percentage: f64,
    pub negative_percentage: f64,
    pub zero_percentage: f64,
    pub valid_percentage: f64,
}

impl CurrencyStat {
    pub fn new(
        column: impl Into<String>,
        currency: impl Into<String>,
        invalid_format: u64,
        negative_values: u64,
        zero_values: u64,
        valid_values: u64,
        total_records: u64,
    ) -> Self {
        Self {
            column: column.into(),
            currency: currency.into(),
            invalid_format,
            negative_values,
            zero_values,
            valid_values,
            total_records,
            invalid_percentage: percentage(invalid_format, total_records),
            negative_percentage: percentage(negative_values, total_records),
            zero_percentage: percentage(zero_values, total_records),
            valid_percentage: percentage(valid_values, total_records),
        }
    }
}
