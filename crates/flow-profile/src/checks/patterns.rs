//! Regex-based detectors for sensitive and encrypted-looking text.

use regex::Regex;

use crate::column::{ColumnView, ValueKind};
use crate::error::{AnalyzerError, ProfileError};

const SENSITIVE_PATTERNS: [(&str, &str); 3] = [
    ("email", r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}"),
    ("card", r"\b\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}\b"),
    ("phone", r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b"),
];

const ENCRYPTED_PATTERNS: [(&str, &str); 2] = [
    ("hex", r"^[A-Fa-f0-9]{32,}$"),
    ("base64", r"^[A-Za-z0-9+/]{32,}={0,2}$"),
];

/// A named group of compiled patterns.
///
/// A value scores one hit per pattern it matches, so a value matching two
/// patterns counts twice.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<(&'static str, Regex)>,
}

impl PatternSet {
    fn compile(patterns: &[(&'static str, &str)]) -> Result<Self, ProfileError> {
        let patterns = patterns
            .iter()
            .map(|(name, pattern)| {
                Regex::new(pattern)
                    .map(|re| (*name, re))
                    .map_err(|source| ProfileError::InvalidPattern {
                        name: (*name).to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Email, card number and phone number detectors.
    pub fn sensitive() -> Result<Self, ProfileError> {
        Self::compile(&SENSITIVE_PATTERNS)
    }

    /// Long hex and base64 detectors.
    pub fn encrypted() -> Result<Self, ProfileError> {
        Self::compile(&ENCRYPTED_PATTERNS)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|(name, _)| *name)
    }

    /// Number of patterns `value` matches.
    pub fn hits(&self, value: &str) -> u64 {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(value))
            .count() as u64
    }

    /// Total hits over the non-null values of a text column. Other kinds
    /// score 0.
    pub fn count_matches(&self, view: &ColumnView<'_>) -> Result<u64, AnalyzerError> {
        if view.kind() != ValueKind::Text {
            return Ok(0);
        }
        Ok(view
            .cells()?
            .iter()
            .filter_map(|cell| cell.as_text())
            .map(|text| self.hits(text))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnAccessor;
    use polars::prelude::*;

    #[test]
    fn sensitive_hits() {
        let set = PatternSet::sensitive().unwrap();
        assert_eq!(set.hits("jane.doe@example.com"), 1);
        assert_eq!(set.hits("4111-1111-1111-1111"), 1);
        assert_eq!(set.hits("555-123-4567"), 1);
        assert_eq!(set.hits("plain text"), 0);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["email", "card", "phone"]);
    }

    #[test]
    fn encrypted_hex_also_matches_base64() {
        let set = PatternSet::encrypted().unwrap();
        let hex = "0123456789abcdef0123456789abcdef";
        assert_eq!(set.hits(hex), 2);
        assert_eq!(set.hits("U29tZSBzZWNyZXQgdmFsdWUgaGVyZSEhIQ=="), 1);
        assert_eq!(set.hits("short"), 0);
    }

    #[test]
    fn non_text_columns_score_zero() {
        let df = DataFrame::new(vec![
            Series::new("Phone".into(), vec![5551234567i64, 5559876543]).into_column(),
            Series::new("Contact".into(), vec![Some("a@b.io"), None]).into_column(),
        ])
        .unwrap();
        let accessor = ColumnAccessor::new(&df);
        let set = PatternSet::sensitive().unwrap();
        assert_eq!(set.count_matches(&accessor.view("Phone").unwrap()).unwrap(), 0);
        assert_eq!(set.count_matches(&accessor.view("Contact").unwrap()).unwrap(), 1);
    }
}
