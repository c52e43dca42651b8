//! Duplicate value check.

use polars::prelude::{ChunkAgg, DataFrame, DataType, IntoLazy, PolarsError, col, len, lit};

use crate::column::ColumnView;
use crate::error::AnalyzerError;

const KEY: &str = "value";
const OCCURRENCES: &str = "occurrences";

/// Outcome of the duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DuplicateSummary {
    /// Rows whose value occurs more than once, every occurrence counted.
    pub rows: u64,
    /// Distinct non-null values that occur more than once.
    pub distinct_values: u64,
}

/// Counts duplicated rows. Nulls are equal to each other.
pub fn check_duplicates(view: &ColumnView<'_>) -> Result<DuplicateSummary, AnalyzerError> {
    let read = |e: PolarsError| AnalyzerError::read(view.name(), e);
    let frame = DataFrame::new(vec![view.column().clone()]).map_err(read)?;
    let duplicated = frame
        .lazy()
        .group_by([col(view.name()).alias(KEY)])
        .agg([len().alias(OCCURRENCES)])
        .filter(col(OCCURRENCES).gt(lit(1)))
        .collect()
        .map_err(read)?;

    let occurrences = duplicated
        .column(OCCURRENCES)
        .and_then(|c| c.cast(&DataType::UInt64))
        .map_err(read)?;
    let rows = occurrences.u64().map_err(read)?.sum().unwrap_or(0);
    let keys = duplicated.column(KEY).map_err(read)?;
    let distinct_values = (keys.len() - keys.null_count()) as u64;

    Ok(DuplicateSummary {
        rows,
        distinct_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnAccessor;
    use polars::prelude::*;

    fn summary(values: Vec<Option<&str>>) -> DuplicateSummary {
        let df = DataFrame::new(vec![Series::new("Code".into(), values).into_column()]).unwrap();
        check_duplicates(&ColumnAccessor::new(&df).view("Code").unwrap()).unwrap()
    }

    #[test]
    fn counts_every_occurrence() {
        let s = summary(vec![Some("a"), Some("b"), Some("a"), Some("c"), Some("b"), Some("a")]);
        assert_eq!(s.rows, 5);
        assert_eq!(s.distinct_values, 2);
    }

    #[test]
    fn nulls_duplicate_each_other() {
        let s = summary(vec![None, Some("x"), None]);
        assert_eq!(s.rows, 2);
        assert_eq!(s.distinct_values, 0);
    }

    #[test]
    fn all_distinct_is_clean() {
        assert_eq!(summary(vec![Some("a"), Some("b")]), DuplicateSummary::default());
    }

    #[test]
    fn integers_compare_exactly() {
        let df = DataFrame::new(vec![
            Series::new("Card".into(), vec![4111111111111111i64, 4111111111111112]).into_column(),
        ])
        .unwrap();
        let s = check_duplicates(&ColumnAccessor::new(&df).view("Card").unwrap()).unwrap();
        assert_eq!(s.rows, 0);
    }
}
