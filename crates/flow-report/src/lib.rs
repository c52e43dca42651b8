//! Report output for IQVIA Flow profiling results.
//!
//! A [`FileReport`] is first laid out as a [`Document`] by
//! [`build_document`], then rendered to HTML by [`render_html`]. The
//! [`write_report`] and [`write_report_json`] helpers put the results in an
//! output directory under deterministic names.

pub mod build;
pub mod document;
pub mod html;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use flow_model::FileReport;

pub use build::{build_document, thousands};
pub use document::{Block, Document, Fact, Section, SectionStyle, TableStyle};
pub use html::render_html;

fn stem_of(source: &str) -> &str {
    let name = Path::new(source)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(source);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// `reports_<stem>.html` for a source file name or path.
///
/// Files with the same stem in different subdirectories map to the same
/// report; the last one written wins.
pub fn report_file_name(source: &str) -> String {
    format!("reports_{}.html", stem_of(source))
}

/// `reports_<stem>.json` for a source file name or path.
pub fn report_json_name(source: &str) -> String {
    format!("reports_{}.json", stem_of(source))
}

/// Renders `report` to HTML in `dir`, returning the written path.
pub fn write_report(dir: &Path, report: &FileReport) -> Result<PathBuf> {
    let html = render_html(&build_document(report))?;
    let path = dir.join(report_file_name(&report.file_name));
    std::fs::write(&path, html).with_context(|| format!("write {}", path.display()))?;
    info!(file = %report.file_name, path = %path.display(), "wrote report");
    Ok(path)
}

/// Writes `report` as pretty JSON next to the HTML report.
pub fn write_report_json(dir: &Path, report: &FileReport) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    let path = dir.join(report_json_name(&report.file_name));
    std::fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    info!(file = %report.file_name, path = %path.display(), "wrote report json");
    Ok(path)
}
