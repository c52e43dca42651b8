//! Metadata normalizer.
//!
//! Hand-edited schema masters arrive with ragged headers and flag spellings
//! (`y`, ` Yes `, `TRUE`, `1`). Everything downstream assumes headers are
//! single-spaced and every present flag column holds exactly `YES` or `NO`.

use polars::prelude::*;
use tracing::debug;

use flow_model::{Flag, FlagKind};

use crate::error::Result;
use crate::polars_utils::any_to_string;

use super::loader::{COLUMN_NAME_HEADER, FILE_NAME_HEADER};

const YES_TOKENS: [&str; 4] = ["YES", "Y", "TRUE", "1"];

/// Trims and collapses internal whitespace runs to a single space.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps a raw flag cell to [`Flag`]. Unknown spellings are `No`.
pub fn normalize_flag(raw: &str) -> Flag {
    let token = normalize_whitespace(raw).to_uppercase();
    if YES_TOKENS.contains(&token.as_str()) {
        Flag::Yes
    } else {
        Flag::No
    }
}

fn column_strings(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx)?));
    }
    Ok(values)
}

fn replace_column(df: &mut DataFrame, name: &str, values: Vec<String>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Renames columns to their whitespace-collapsed header and keeps the first
/// of any that collapse to the same name. Returns the surviving names.
fn collapse_headers(df: &mut DataFrame) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());
    for column in std::mem::take(df).take_columns() {
        let name = normalize_whitespace(column.name().as_str());
        if names.contains(&name) {
            debug!(column = %name, "dropping duplicate metadata column");
            continue;
        }
        columns.push(column.with_name(name.as_str().into()));
        names.push(name);
    }
    *df = DataFrame::new(columns)?;
    Ok(names)
}

/// Normalizes a metadata frame in place.
///
/// Headers and `Column Name` values are whitespace-collapsed, `File Name`
/// values trimmed, and each flag column present rewritten to `YES`/`NO`.
/// Headers that collapse to the same name keep their first column. Flag
/// columns the frame lacks are skipped.
pub fn normalize_metadata(df: &mut DataFrame) -> Result<()> {
    let names = collapse_headers(df)?;

    if names.iter().any(|name| name == COLUMN_NAME_HEADER) {
        let values = column_strings(df, COLUMN_NAME_HEADER)?
            .iter()
            .map(|value| normalize_whitespace(value))
            .collect();
        replace_column(df, COLUMN_NAME_HEADER, values)?;
    }

    if names.iter().any(|name| name == FILE_NAME_HEADER) {
        let values = column_strings(df, FILE_NAME_HEADER)?
            .iter()
            .map(|value| value.trim().to_string())
            .collect();
        replace_column(df, FILE_NAME_HEADER, values)?;
    }

    for kind in FlagKind::ALL {
        let header = kind.header();
        if !names.iter().any(|name| name == header) {
            debug!(flag = header, "flag column absent, skipping");
            continue;
        }
        let values = column_strings(df, header)?
            .iter()
            .map(|value| normalize_flag(value).as_str().to_string())
            .collect();
        replace_column(df, header, values)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frame(columns: &[(&str, &[&str])]) -> DataFrame {
        let cols: Vec<Column> = columns
            .iter()
            .map(|(name, values)| {
                let values: Vec<String> = values.iter().map(|v| (*v).to_string()).collect();
                Series::new((*name).into(), values).into_column()
            })
            .collect();
        DataFrame::new(cols).unwrap()
    }

    fn strings(df: &DataFrame, name: &str) -> Vec<String> {
        column_strings(df, name).unwrap()
    }

    #[test]
    fn normalizes_flag_spellings() {
        let mut df = frame(&[
            ("File Name", &["sales", "sales", "sales", "sales", "sales"]),
            ("Column Name", &["A", "B", "C", "D", "E"]),
            ("Is Mandatory", &["y", " Yes ", "TRUE", "0", ""]),
        ]);
        normalize_metadata(&mut df).unwrap();
        assert_eq!(
            strings(&df, "Is Mandatory"),
            vec!["YES", "YES", "YES", "NO", "NO"]
        );
    }

    #[test]
    fn normalizes_headers_and_column_names() {
        let mut df = frame(&[
            (" File  Name ", &["  sales "]),
            ("Column   Name", &["  Unit    Price "]),
            ("Is  Unique", &["1"]),
        ]);
        normalize_metadata(&mut df).unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["File Name", "Column Name", "Is Unique"]);
        assert_eq!(strings(&df, "Column Name"), vec!["Unit Price"]);
        assert_eq!(strings(&df, "File Name"), vec!["sales"]);
        assert_eq!(strings(&df, "Is Unique"), vec!["YES"]);
    }

    #[test]
    fn collapsed_duplicate_headers_keep_first() {
        let mut df = frame(&[
            ("File Name", &["sales"]),
            ("Column Name", &["A"]),
            ("Is Mandatory", &["yes"]),
            ("Is  Mandatory", &["no"]),
        ]);
        normalize_metadata(&mut df).unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["File Name", "Column Name", "Is Mandatory"]);
        assert_eq!(strings(&df, "Is Mandatory"), vec!["YES"]);
    }

    #[test]
    fn skips_missing_flag_columns() {
        let mut df = frame(&[("File Name", &["sales"]), ("Column Name", &["A"])]);
        normalize_metadata(&mut df).unwrap();
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn null_flags_become_no() {
        let cols = vec![
            Series::new("File Name".into(), vec!["sales"]).into_column(),
            Series::new("Column Name".into(), vec!["A"]).into_column(),
            Series::new("Sensitive".into(), vec![None::<&str>]).into_column(),
        ];
        let mut df = DataFrame::new(cols).unwrap();
        normalize_metadata(&mut df).unwrap();
        assert_eq!(strings(&df, "Sensitive"), vec!["NO"]);
    }

    proptest! {
        #[test]
        fn flag_output_is_always_yes_or_no(raw in ".*") {
            let flag = normalize_flag(&raw);
            prop_assert!(matches!(flag.as_str(), "YES" | "NO"));
        }

        #[test]
        fn padded_yes_tokens_are_yes(
            token in prop::sample::select(vec!["yes", "Y", "true", "1", "YES", "True"]),
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
        ) {
            let raw = format!("{left}{token}{right}");
            prop_assert_eq!(normalize_flag(&raw), Flag::Yes);
        }

        #[test]
        fn whitespace_normalization_is_idempotent(raw in "[a-zA-Z \t]{0,20}") {
            let once = normalize_whitespace(&raw);
            prop_assert_eq!(normalize_whitespace(&once), once.clone());
            prop_assert!(!once.contains("  "));
        }
    }
}
