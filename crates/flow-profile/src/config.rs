//! Profiler configuration.
//!
//! A [`ProfilerConfig`] is built once per run and handed to the profiler by
//! value; nothing reads configuration from globals.

use std::collections::BTreeMap;

/// Currency used when no code is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

const CURRENCY_PATTERNS: [(&str, &str); 4] = [
    ("USD", r"^\$?\d{1,3}(,\d{3})*(\.\d{2})?$"),
    ("EUR", r"^€?\d{1,3}(,\d{3})*(\.\d{2})?$"),
    ("GBP", r"^£?\d{1,3}(,\d{3})*(\.\d{2})?$"),
    ("INR", r"^₹?\d{1,3}(,\d{3})*(\.\d{2})?$"),
];

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '₹'];

const CURRENCY_INDICATORS: [&str; 19] = [
    "price", "amount", "cost", "fee", "charge", "payment", "salary", "wage", "income", "expense",
    "revenue", "$", "£", "€", "₹", "usd", "eur", "gbp", "inr",
];

/// Immutable settings for a profiling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilerConfig {
    currency: String,
    currency_patterns: BTreeMap<String, String>,
    currency_symbols: Vec<char>,
    currency_indicators: Vec<String>,
    detect_currency_by_name: bool,
    report_timestamp: Option<String>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            currency_patterns: CURRENCY_PATTERNS
                .iter()
                .map(|(code, pattern)| ((*code).to_string(), (*pattern).to_string()))
                .collect(),
            currency_symbols: CURRENCY_SYMBOLS.to_vec(),
            currency_indicators: CURRENCY_INDICATORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            detect_currency_by_name: false,
            report_timestamp: None,
        }
    }
}

impl ProfilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected currency code (`USD`, `EUR`, ...). Case-insensitive.
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into().trim().to_uppercase();
        self
    }

    /// Adds or replaces the validation pattern for a currency code.
    pub fn with_currency_pattern(
        mut self,
        code: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.currency_patterns
            .insert(code.into().trim().to_uppercase(), pattern.into());
        self
    }

    pub fn with_currency_symbols(mut self, symbols: Vec<char>) -> Self {
        self.currency_symbols = symbols;
        self
    }

    pub fn with_currency_indicators(mut self, indicators: Vec<String>) -> Self {
        self.currency_indicators = indicators;
        self
    }

    /// Also treat columns whose name looks monetary as currency columns.
    pub fn with_detect_currency_by_name(mut self, enabled: bool) -> Self {
        self.detect_currency_by_name = enabled;
        self
    }

    /// Fixes the "generated at" text instead of using the local clock.
    pub fn with_report_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.report_timestamp = Some(timestamp.into());
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Pattern for the configured currency, falling back to USD.
    pub fn currency_pattern(&self) -> &str {
        self.currency_patterns
            .get(&self.currency)
            .or_else(|| self.currency_patterns.get(DEFAULT_CURRENCY))
            .map(String::as_str)
            .unwrap_or(CURRENCY_PATTERNS[0].1)
    }

    pub fn currency_symbols(&self) -> &[char] {
        &self.currency_symbols
    }

    pub fn currency_indicators(&self) -> &[String] {
        &self.currency_indicators
    }

    pub fn detect_currency_by_name(&self) -> bool {
        self.detect_currency_by_name
    }

    pub fn report_timestamp(&self) -> Option<&str> {
        self.report_timestamp.as_deref()
    }

    /// Currency codes with a known pattern.
    pub fn known_currencies(&self) -> impl Iterator<Item = &str> {
        self.currency_patterns.keys().map(String::as_str)
    }
}
