//! Data quality profiling for IQVIA Flow.
//!
//! Given a loaded CSV and the metadata rows that describe it, this crate
//! classifies columns, runs the metadata-driven checks and numeric analyzers,
//! derives recommendations, and scores the file.
//!
//! # Example
//!
//! ```ignore
//! use flow_profile::{DataProfiler, ProfilerConfig};
//!
//! let metadata = flow_ingest::load_metadata(Path::new("master.csv"))?;
//! let profiler = DataProfiler::new(ProfilerConfig::default(), &metadata)?;
//! let report = profiler.profile_file(Path::new("raw/sales.csv"))?;
//! println!("{}: {}", report.file_name, report.quality_score.overall_score);
//! ```

pub mod checks;
pub mod classifier;
pub mod column;
pub mod config;
pub mod error;
pub mod profiler;
pub mod recommend;
pub mod score;
pub mod stats;

pub use classifier::{is_analyzable_numeric, is_currency_column, numeric_columns};
pub use column::{CellValue, ColumnAccessor, ColumnView, ValueKind};
pub use config::{DEFAULT_CURRENCY, ProfilerConfig};
pub use error::{AnalyzerError, ProfileError, Result};
pub use profiler::DataProfiler;
pub use recommend::generate_recommendations;
pub use score::{ScoreInputs, quality_score};
