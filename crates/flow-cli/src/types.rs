use std::path::PathBuf;

use flow_profile::ProfilerConfig;

/// Everything a profiling run needs, assembled from command-line arguments.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub metadata: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Also write `reports_<stem>.json`.
    pub write_json: bool,
    /// Exit non-zero when any file was skipped.
    pub fail_on_skip: bool,
    pub profiler: ProfilerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Profiled {
        rows: u64,
        columns: u64,
        score: f64,
        report: PathBuf,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub file: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub files: Vec<FileOutcome>,
}

impl RunResult {
    pub fn profiled_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Profiled { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.files.len() - self.profiled_count()
    }

    /// Process exit code for this run.
    pub fn exit_code(&self, fail_on_skip: bool) -> i32 {
        if fail_on_skip && self.skipped_count() > 0 {
            1
        } else {
            0
        }
    }
}
