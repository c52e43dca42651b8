use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span};

use flow_ingest::{list_csv_files, load_metadata};
use flow_model::FileReport;
use flow_profile::{DataProfiler, ProfileError};
use flow_report::{write_report, write_report_json};

use crate::types::{FileOutcome, FileStatus, RunConfig, RunResult};

/// Profiles every CSV under the input directory and writes one report per file.
///
/// Creating the output directory, loading the metadata and listing the
/// input directory are fatal. Anything that goes wrong with a single file
/// only skips that file.
pub fn run_profile(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("profile_run", input = %config.input_dir.display());
    let _guard = span.enter();
    let started = Instant::now();

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output directory {}", config.output_dir.display()))?;
    let metadata = load_metadata(&config.metadata)
        .with_context(|| format!("load metadata {}", config.metadata.display()))?;
    let profiler =
        DataProfiler::new(config.profiler.clone(), &metadata).context("configure profiler")?;
    let files = list_csv_files(&config.input_dir)
        .with_context(|| format!("list {}", config.input_dir.display()))?;
    info!(
        files = files.len(),
        metadata_rows = metadata.len(),
        "starting profiling run"
    );

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        if is_same_file(&file, &config.metadata) {
            debug!(file = %file.display(), "skipping metadata file");
            continue;
        }
        let status = profile_one(&profiler, config, &file);
        outcomes.push(FileOutcome { file, status });
    }

    let result = RunResult {
        output_dir: config.output_dir.clone(),
        files: outcomes,
    };
    info!(
        profiled = result.profiled_count(),
        skipped = result.skipped_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "profiling run complete"
    );
    Ok(result)
}

fn profile_one(profiler: &DataProfiler<'_>, config: &RunConfig, file: &Path) -> FileStatus {
    let report = match profiler.profile_file(file) {
        Ok(report) => report,
        // already logged by the profiler
        Err(err @ ProfileError::NoMetadata { .. }) => {
            return FileStatus::Skipped {
                reason: err.to_string(),
            };
        }
        Err(err) => {
            error!(file = %file.display(), error = %err, "skipping unreadable file");
            return FileStatus::Skipped {
                reason: err.to_string(),
            };
        }
    };

    match write_outputs(config, &report) {
        Ok(path) => FileStatus::Profiled {
            rows: report.total_rows,
            columns: report.total_columns,
            score: report.quality_score.overall_score,
            report: path,
        },
        Err(err) => {
            error!(file = %file.display(), error = %format!("{err:#}"), "failed to write report");
            FileStatus::Skipped {
                reason: format!("{err:#}"),
            }
        }
    }
}

fn write_outputs(config: &RunConfig, report: &FileReport) -> Result<PathBuf> {
    let html = write_report(&config.output_dir, report)?;
    if config.write_json {
        write_report_json(&config.output_dir, report)?;
    }
    Ok(html)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
