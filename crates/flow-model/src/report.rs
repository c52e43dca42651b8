//! Aggregate of everything computed for one source file.

use serde::{Deserialize, Serialize};

use crate::check::{CheckKind, ColumnStat, CurrencyStat};
use crate::metadata::{FlagKind, MetadataRow};
use crate::score::QualityScore;
use crate::stats::{CorrelationPair, DescriptiveStat, OutlierResult};

/// Column names flagged YES in the file's metadata, regardless of whether the
/// file actually contains them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedColumns {
    pub mandatory: Vec<String>,
    pub unique: Vec<String>,
    pub sensitive: Vec<String>,
    pub encrypted: Vec<String>,
    pub currency: Vec<String>,
}

impl FlaggedColumns {
    pub fn from_rows(rows: &[&MetadataRow]) -> Self {
        let pick = |kind: FlagKind| -> Vec<String> {
            rows.iter()
                .filter(|row| row.is_flagged(kind))
                .map(|row| row.column_name.clone())
                .collect()
        };
        Self {
            mandatory: pick(FlagKind::Mandatory),
            unique: pick(FlagKind::Unique),
            sensitive: pick(FlagKind::Sensitive),
            encrypted: pick(FlagKind::Encrypted),
            currency: pick(FlagKind::Currency),
        }
    }

    pub fn get(&self, kind: FlagKind) -> &[String] {
        match kind {
            FlagKind::Mandatory => &self.mandatory,
            FlagKind::Unique => &self.unique,
            FlagKind::Sensitive => &self.sensitive,
            FlagKind::Encrypted => &self.encrypted,
            FlagKind::Currency => &self.currency,
        }
    }
}

/// Full profiling result for one file. Built once, rendered once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Base file name, e.g. `sales.csv`.
    pub file_name: String,
    pub file_path: String,
    /// Lowercase hex SHA-256 of the raw source bytes.
    pub source_sha256: String,
    pub generated_at: String,
    pub total_rows: u64,
    /// Header count as read, before duplicate columns are collapsed.
    pub total_columns: u64,
    /// Distinct raw header names.
    pub unique_columns: u64,
    pub flagged: FlaggedColumns,
    pub missing_columns: Vec<String>,
    pub additional_columns: Vec<String>,
    pub mandatory_stats: Vec<ColumnStat>,
    pub unique_stats: Vec<ColumnStat>,
    pub sensitive_stats: Vec<ColumnStat>,
    pub encrypted_stats: Vec<ColumnStat>,
    pub currency_stats: Vec<CurrencyStat>,
    pub descriptive_stats: Vec<DescriptiveStat>,
    pub outliers: Vec<OutlierResult>,
    pub correlations: Vec<CorrelationPair>,
    pub recommendations: Vec<String>,
    pub quality_score: QualityScore,
}

impl FileReport {
    pub fn stats_for(&self, kind: CheckKind) -> &[ColumnStat] {
        match kind {
            CheckKind::Mandatory => &self.mandatory_stats,
            CheckKind::Unique => &self.unique_stats,
            CheckKind::Sensitive => &self.sensitive_stats,
            CheckKind::Encrypted => &self.encrypted_stats,
        }
    }

    /// File name without its extension, used for report naming.
    pub fn file_stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }
}
