//! Per-file profiling pipeline.
//!
//! [`DataProfiler::profile_file`] loads one CSV, runs every check the
//! metadata asks for plus the numeric analyzers, and returns a finished
//! [`FileReport`]. Analyzer failures are logged and the affected metric is
//! left out; only missing metadata or an unreadable file fail the whole file.

use std::path::Path;

use polars::prelude::Float64Chunked;
use tracing::{debug, error, info, info_span, warn};

use flow_ingest::{SourceTable, read_source_table};
use flow_model::{
    CheckKind, ColumnStat, CorrelationPair, CurrencyStat, DescriptiveStat, FileReport,
    FlagKind, FlaggedColumns, MetadataRow, MetadataTable, OutlierResult, ScoreWeights,
};

use crate::checks::{CurrencyRules, PatternSet, check_currency, check_duplicates, check_nulls};
use crate::classifier::{is_currency_column, numeric_columns};
use crate::column::{ColumnAccessor, ColumnView};
use crate::config::ProfilerConfig;
use crate::error::{AnalyzerError, ProfileError, Result};
use crate::recommend::generate_recommendations;
use crate::score::{ScoreInputs, quality_score};
use crate::stats::{correlations, describe, iqr_outliers};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pushes `name` unless already present.
fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
}

/// Profiles files against a shared, read-only metadata table.
#[derive(Debug)]
pub struct DataProfiler<'m> {
    config: ProfilerConfig,
    metadata: &'m MetadataTable,
    sensitive: PatternSet,
    encrypted: PatternSet,
    currency: CurrencyRules,
    weights: ScoreWeights,
}

/// Numeric analyzer output for one file.
#[derive(Debug, Default)]
struct NumericResults {
    descriptive: Vec<DescriptiveStat>,
    outliers: Vec<OutlierResult>,
    correlations: Vec<CorrelationPair>,
}

impl<'m> DataProfiler<'m> {
    /// Compiles the detectors once for the whole run.
    pub fn new(config: ProfilerConfig, metadata: &'m MetadataTable) -> Result<Self> {
        Ok(Self {
            currency: CurrencyRules::from_config(&config)?,
            sensitive: PatternSet::sensitive()?,
            encrypted: PatternSet::encrypted()?,
            weights: ScoreWeights::DEFAULT,
            config,
            metadata,
        })
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profiles one file.
    ///
    /// # Errors
    ///
    /// [`ProfileError::NoMetadata`] when no metadata row names the file's
    /// stem, and [`ProfileError::Ingest`] when the file cannot be read.
    pub fn profile_file(&self, path: &Path) -> Result<FileReport> {
        let (Some(file_name), Some(stem)) = (path.file_name(), path.file_stem()) else {
            return Err(ProfileError::InvalidPath {
                path: path.to_path_buf(),
            });
        };
        let file_name = file_name.to_string_lossy().into_owned();
        let stem = stem.to_string_lossy().into_owned();

        let span = info_span!("profile_file", file = %file_name);
        let _enter = span.enter();

        let rows = self.metadata.rows_for_file(&stem);
        if rows.is_empty() {
            warn!(stem = %stem, "no metadata for file, skipping");
            return Err(ProfileError::NoMetadata { stem });
        }
        debug!(metadata_rows = rows.len(), "matched metadata");

        let table = read_source_table(path)?;
        info!(
            rows = table.total_rows(),
            columns = table.total_columns(),
            encoding = table.encoding.as_str(),
            "profiling file"
        );

        Ok(self.build_report(file_name, path, &rows, &table))
    }

    fn build_report(
        &self,
        file_name: String,
        path: &Path,
        rows: &[&MetadataRow],
        table: &SourceTable,
    ) -> FileReport {
        let accessor = ColumnAccessor::new(&table.frame);
        let actual = accessor.names();
        let total_rows = table.total_rows() as u64;

        let mut expected: Vec<String> = Vec::new();
        for row in rows {
            push_unique(&mut expected, &row.column_name);
        }
        let missing_columns: Vec<String> = expected
            .iter()
            .filter(|name| !actual.contains(name))
            .cloned()
            .collect();
        let additional_columns: Vec<String> = actual
            .iter()
            .filter(|name| !expected.contains(name))
            .cloned()
            .collect();

        let flagged = FlaggedColumns::from_rows(rows);
        let present = |kind: FlagKind| -> Vec<String> {
            let mut columns = Vec::new();
            for name in flagged.get(kind) {
                if actual.contains(name) {
                    push_unique(&mut columns, name);
                }
            }
            columns
        };

        let check_stats = CheckKind::ALL.map(|kind| {
            present(kind.flag())
                .iter()
                .filter_map(|column| self.run_check(&accessor, kind, column, total_rows))
                .collect::<Vec<_>>()
        });

        let mut currency_columns = present(FlagKind::Currency);
        if self.config.detect_currency_by_name() {
            for name in &actual {
                if is_currency_column(name, self.config.currency_indicators()) {
                    push_unique(&mut currency_columns, name);
                }
            }
        }
        let currency_stats: Vec<CurrencyStat> = currency_columns
            .iter()
            .filter_map(|column| self.run_currency(&accessor, column, total_rows))
            .collect();

        let numeric = self.analyze_numeric(&accessor, table.total_rows());
        let recommendations =
            generate_recommendations(&numeric.descriptive, &numeric.outliers, &numeric.correlations);

        let [mandatory_stats, unique_stats, sensitive_stats, encrypted_stats] = check_stats;

        let quality_score = quality_score(
            &ScoreInputs {
                mandatory_stats: &mandatory_stats,
                unique_stats: &unique_stats,
                outliers: &numeric.outliers,
                correlations: &numeric.correlations,
                recommendation_count: recommendations.len(),
            },
            &self.weights,
        );
        info!(
            overall = quality_score.overall_score,
            recommendations = recommendations.len(),
            "scored file"
        );

        FileReport {
            file_name,
            file_path: path.display().to_string(),
            source_sha256: table.sha256.clone(),
            generated_at: self.timestamp(),
            total_rows,
            total_columns: table.total_columns() as u64,
            unique_columns: table.unique_columns() as u64,
            flagged,
            missing_columns,
            additional_columns,
            mandatory_stats,
            unique_stats,
            sensitive_stats,
            encrypted_stats,
            currency_stats,
            descriptive_stats: numeric.descriptive,
            outliers: numeric.outliers,
            correlations: numeric.correlations,
            recommendations,
            quality_score,
        }
    }

    fn timestamp(&self) -> String {
        match self.config.report_timestamp() {
            Some(fixed) => fixed.to_string(),
            None => chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    fn check_column(
        &self,
        view: &ColumnView<'_>,
        kind: CheckKind,
        total_rows: u64,
    ) -> std::result::Result<ColumnStat, AnalyzerError> {
        let column = view.name();
        Ok(match kind {
            CheckKind::Mandatory => {
                let count = check_nulls(view)?;
                ColumnStat::new(column, count, total_rows, format!("({count} null values)"))
            }
            CheckKind::Unique => {
                let summary = check_duplicates(view)?;
                ColumnStat::new(
                    column,
                    summary.rows,
                    total_rows,
                    format!("({} duplicate values)", summary.distinct_values),
                )
            }
            CheckKind::Sensitive => {
                let count = self.sensitive.count_matches(view)?;
                ColumnStat::new(column, count, total_rows, "(sensitive values)")
            }
            CheckKind::Encrypted => {
                let count = self.encrypted.count_matches(view)?;
                ColumnStat::new(column, count, total_rows, "(encrypted values)")
            }
        })
    }

    fn run_check(
        &self,
        accessor: &ColumnAccessor<'_>,
        kind: CheckKind,
        column: &str,
        total_rows: u64,
    ) -> Option<ColumnStat> {
        let result = accessor
            .view(column)
            .and_then(|view| self.check_column(&view, kind, total_rows));
        match result {
            Ok(stat) => {
                debug!(
                    check = kind.as_str(),
                    column,
                    count = stat.count,
                    percentage = stat.percentage,
                    "check complete"
                );
                Some(stat)
            }
            Err(err) => {
                error!(check = kind.as_str(), column, error = %err, "check failed");
                None
            }
        }
    }

    fn run_currency(
        &self,
        accessor: &ColumnAccessor<'_>,
        column: &str,
        total_rows: u64,
    ) -> Option<CurrencyStat> {
        let result = accessor
            .view(column)
            .and_then(|view| check_currency(&view, &self.currency));
        match result {
            Ok(counts) => {
                debug!(column, currency = self.currency.code(), ?counts, "currency check complete");
                Some(CurrencyStat::new(
                    column,
                    self.currency.code(),
                    counts.invalid,
                    counts.negative,
                    counts.zero,
                    counts.valid,
                    total_rows,
                ))
            }
            Err(err) => {
                error!(check = "currency", column, error = %err, "check failed");
                None
            }
        }
    }

    fn analyze_numeric(&self, accessor: &ColumnAccessor<'_>, total_rows: usize) -> NumericResults {
        let frame_columns = match numeric_columns(accessor.frame()) {
            Ok(columns) => columns,
            Err(err) => {
                error!(error = %err, "column classification failed");
                return NumericResults::default();
            }
        };
        debug!(columns = ?frame_columns, "analyzing numeric columns");

        let mut results = NumericResults::default();
        let mut by_row: Vec<(String, Float64Chunked)> = Vec::new();

        for column in &frame_columns {
            let values = match accessor.view(column).and_then(|view| view.floats()) {
                Ok(values) => values,
                Err(err) => {
                    error!(column = %column, error = %err, "failed to read numeric column");
                    continue;
                }
            };

            match describe(column, &values) {
                Ok(stat) => results.descriptive.push(stat),
                Err(err) => error!(column = %column, error = %err, "descriptive statistics failed"),
            }
            match iqr_outliers(column, &values, total_rows) {
                Ok(outlier) => results.outliers.push(outlier),
                Err(err) => error!(column = %column, error = %err, "outlier detection failed"),
            }
            by_row.push((column.clone(), values));
        }

        results.correlations = correlations(&by_row);
        results
    }
}
