//! Null-like value check.

use crate::column::{CellValue, ColumnView};
use crate::error::AnalyzerError;

const NULL_TEXTS: [&str; 3] = ["NA", "NaN", "None"];

/// Whether a cell counts as missing: null, empty, whitespace-only, or exactly
/// one of the `NA`/`NaN`/`None` placeholders. Padded placeholders are values.
pub fn is_null_like(cell: &CellValue) -> bool {
    match cell {
        CellValue::Null => true,
        CellValue::Number(v) => v.is_nan(),
        CellValue::Text(s) | CellValue::Other(s) => {
            s.trim().is_empty() || NULL_TEXTS.contains(&s.as_str())
        }
    }
}

/// Counts null-like cells, each cell at most once.
pub fn check_nulls(view: &ColumnView<'_>) -> Result<u64, AnalyzerError> {
    Ok(view.cells()?.iter().filter(|cell| is_null_like(cell)).count() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnAccessor;
    use polars::prelude::*;

    #[test]
    fn counts_each_null_once() {
        let df = DataFrame::new(vec![
            Series::new("Name".into(), vec![Some(""), Some(" "), Some("NA"), None, Some("x")])
                .into_column(),
        ])
        .unwrap();
        let view = ColumnAccessor::new(&df).view("Name").unwrap();
        assert_eq!(check_nulls(&view).unwrap(), 4);
    }

    #[test]
    fn numeric_nulls() {
        let df = DataFrame::new(vec![
            Series::new("Amount".into(), vec![Some(1.0), None, Some(f64::NAN)]).into_column(),
        ])
        .unwrap();
        let view = ColumnAccessor::new(&df).view("Amount").unwrap();
        assert_eq!(check_nulls(&view).unwrap(), 2);
    }

    #[test]
    fn placeholder_text_is_null_like() {
        assert!(is_null_like(&CellValue::Text("None".to_string())));
        assert!(is_null_like(&CellValue::Text("NaN".to_string())));
        assert!(is_null_like(&CellValue::Text("\t ".to_string())));
        assert!(!is_null_like(&CellValue::Text(" None ".to_string())));
        assert!(!is_null_like(&CellValue::Text("n/a".to_string())));
        assert!(!is_null_like(&CellValue::Number(0.0)));
    }

    #[test]
    fn padded_placeholders_are_values() {
        let df = DataFrame::new(vec![
            Series::new("Name".into(), vec![" NA ", "None ", " NaN", "x"]).into_column(),
        ])
        .unwrap();
        let view = ColumnAccessor::new(&df).view("Name").unwrap();
        assert_eq!(check_nulls(&view).unwrap(), 0);
    }
}
