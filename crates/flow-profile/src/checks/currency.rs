//! Currency format check.

use regex::Regex;

use flow_ingest::{format_numeric, parse_f64};

use crate::column::{CellValue, ColumnView};
use crate::config::ProfilerConfig;
use crate::error::{AnalyzerError, ProfileError};

/// Compiled currency validation settings.
#[derive(Debug, Clone)]
pub struct CurrencyRules {
    code: String,
    pattern: Regex,
    symbols: Vec<char>,
}

/// Per-bucket counts over the non-null values of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyCounts {
    pub invalid: u64,
    pub negative: u64,
    pub zero: u64,
    pub valid: u64,
}

/// Outcome for a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Invalid,
    Negative,
    Zero,
    Valid,
}

impl CurrencyRules {
    pub fn from_config(config: &ProfilerConfig) -> Result<Self, ProfileError> {
        let pattern =
            Regex::new(config.currency_pattern()).map_err(|source| ProfileError::InvalidPattern {
                name: format!("{} currency", config.currency()),
                source,
            })?;
        Ok(Self {
            code: config.currency().to_string(),
            pattern,
            symbols: config.currency_symbols().to_vec(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    fn classify(&self, raw: &str) -> Bucket {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|c| !self.symbols.contains(c))
            .collect();
        let cleaned: String = stripped.chars().filter(|c| *c != ',').collect();

        let Some(value) = parse_f64(&cleaned) else {
            return Bucket::Invalid;
        };
        if value < 0.0 {
            Bucket::Negative
        } else if value == 0.0 {
            Bucket::Zero
        } else if self.pattern.is_match(stripped.trim()) {
            Bucket::Valid
        } else {
            Bucket::Invalid
        }
    }
}

/// Sorts every non-null value of `view` into one bucket.
///
/// Numbers are checked in their shortest text form, so `12.0` reads as `12`.
pub fn check_currency(
    view: &ColumnView<'_>,
    rules: &CurrencyRules,
) -> Result<CurrencyCounts, AnalyzerError> {
    let mut counts = CurrencyCounts::default();
    for cell in view.cells()? {
        let text = match cell {
            CellValue::Null => continue,
            CellValue::Number(v) => format_numeric(v),
            CellValue::Text(s) | CellValue::Other(s) => s,
        };
        match rules.classify(&text) {
            Bucket::Invalid => counts.invalid += 1,
            Bucket::Negative => counts.negative += 1,
            Bucket::Zero => counts.zero += 1,
            Bucket::Valid => counts.valid += 1,
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnAccessor;
    use polars::prelude::*;

    fn usd() -> CurrencyRules {
        CurrencyRules::from_config(&ProfilerConfig::default()).unwrap()
    }

    #[test]
    fn classifies_values() {
        let rules = usd();
        assert_eq!(rules.classify("$1,234.50"), Bucket::Valid);
        assert_eq!(rules.classify("12"), Bucket::Valid);
        assert_eq!(rules.classify("-5.00"), Bucket::Negative);
        assert_eq!(rules.classify("$0.00"), Bucket::Zero);
        assert_eq!(rules.classify("12.5"), Bucket::Invalid);
        assert_eq!(rules.classify("1234.00"), Bucket::Invalid);
        assert_eq!(rules.classify("abc"), Bucket::Invalid);
    }

    #[test]
    fn other_currency_symbols_are_stripped() {
        let rules = CurrencyRules::from_config(&ProfilerConfig::new().with_currency("EUR")).unwrap();
        assert_eq!(rules.code(), "EUR");
        assert_eq!(rules.classify("€1,000.00"), Bucket::Valid);
        assert_eq!(rules.classify("£1,000.00"), Bucket::Valid);
    }

    #[test]
    fn counts_column() {
        let df = DataFrame::new(vec![
            Series::new(
                "Price".into(),
                vec![Some("$10.00"), Some("-1"), Some("0"), None, Some("ten")],
            )
            .into_column(),
        ])
        .unwrap();
        let view = ColumnAccessor::new(&df).view("Price").unwrap();
        let counts = check_currency(&view, &usd()).unwrap();
        assert_eq!(
            counts,
            CurrencyCounts {
                invalid: 1,
                negative: 1,
                zero: 1,
                valid: 1,
            }
        );
    }
}
