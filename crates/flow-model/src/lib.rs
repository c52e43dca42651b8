//! Data model for IQVIA Flow data quality profiling.
//!
//! Every structure here is plain data: the profiling engine in `flow-profile`
//! produces it, `flow-report` renders it. All types serialize with serde so a
//! report can also be persisted as JSON.

pub mod check;
pub mod metadata;
pub mod numeric;
pub mod report;
pub mod score;
pub mod stats;

pub use check::{CheckKind, ColumnStat, CurrencyStat};
pub use metadata::{Flag, FlagKind, MetadataRow, MetadataTable};
pub use numeric::{format_decimal, percentage, round_to};
pub use report::{FileReport, FlaggedColumns};
pub use score::{ComponentScores, QualityScore, ScoreWeights};
pub use stats::{CorrelationPair, DescriptiveStat, OutlierResult};
