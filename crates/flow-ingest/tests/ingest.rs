//! Integration tests for loading a metadata table alongside its data files.

use flow_ingest::{FromFrame, list_csv_files, load_metadata, normalize_metadata, read_source_table};
use flow_model::{Flag, FlagKind, MetadataTable};
use polars::prelude::*;
use tempfile::TempDir;

#[test]
fn metadata_matches_discovered_files() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw");
    std::fs::create_dir_all(raw.join("archive")).unwrap();
    std::fs::write(raw.join("Sales.csv"), "Amount,Region\n10,N\n").unwrap();
    std::fs::write(raw.join("archive").join("orders.csv"), "Qty\n1\n").unwrap();

    let metadata_path = dir.path().join("master.csv");
    std::fs::write(
        &metadata_path,
        "File Name,Column Name,Is Mandatory\n sales ,Amount,Y\norders,Qty,no\n",
    )
    .unwrap();

    let metadata = load_metadata(&metadata_path).unwrap();
    let files = list_csv_files(&raw).unwrap();
    assert_eq!(files.len(), 2);

    for path in &files {
        let stem = path.file_stem().unwrap().to_string_lossy();
        let rows = metadata.rows_for_file(&stem);
        assert_eq!(rows.len(), 1, "no metadata for {stem}");

        let table = read_source_table(path).unwrap();
        assert!(table.frame.column(&rows[0].column_name).is_ok());
    }

    let sales = metadata.rows_for_file("Sales");
    assert_eq!(sales[0].flag(FlagKind::Mandatory), Some(Flag::Yes));
}

#[test]
fn table_from_normalized_frame() {
    let mut df = DataFrame::new(vec![
        Series::new("File  Name".into(), vec!["sales"]).into_column(),
        Series::new("Column Name".into(), vec!["Amount"]).into_column(),
        Series::new("Encrypted".into(), vec!["true"]).into_column(),
    ])
    .unwrap();
    normalize_metadata(&mut df).unwrap();

    let table = MetadataTable::from_frame(&df).unwrap();
    assert!(table.has_flag(FlagKind::Encrypted));
    assert!(table.rows()[0].is_flagged(FlagKind::Encrypted));
    assert!(!table.rows()[0].is_flagged(FlagKind::Mandatory));
}
