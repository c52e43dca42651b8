//! Tests for flow-model types.

use flow_model::{
    CheckKind, ColumnStat, ComponentScores, FileReport, Flag, FlagKind, FlaggedColumns,
    MetadataRow, QualityScore,
};

fn empty_report() -> FileReport {
    FileReport {
        file_name: "sales.2024.csv".to_string(),
        file_path: "raw/sales.2024.csv".to_string(),
        source_sha256: String::new(),
        generated_at: "2024-01-01 00:00:00".to_string(),
        total_rows: 3,
        total_columns: 2,
        unique_columns: 2,
        flagged: FlaggedColumns::default(),
        missing_columns: vec![],
        additional_columns: vec![],
        mandatory_stats: vec![ColumnStat::new("Amount", 1, 3, "(1 null values)")],
        unique_stats: vec![],
        sensitive_stats: vec![],
        encrypted_stats: vec![],
        currency_stats: vec![],
        descriptive_stats: vec![],
        outliers: vec![],
        correlations: vec![],
        recommendations: vec![],
        quality_score: QualityScore {
            overall_score: 10.0,
            component_scores: ComponentScores {
                completeness: 10.0,
                uniqueness: 10.0,
                validity: 10.0,
                outliers: 10.0,
                consistency: 10.0,
            },
            recommendations: vec![],
        },
    }
}

#[test]
fn flagged_columns_follow_metadata_order() {
    let a = MetadataRow::new("sales", "Amount")
        .with_flag(FlagKind::Mandatory, Flag::Yes)
        .with_flag(FlagKind::Currency, Flag::Yes);
    let b = MetadataRow::new("sales", "Region").with_flag(FlagKind::Mandatory, Flag::Yes);
    let c = MetadataRow::new("sales", "Email").with_flag(FlagKind::Sensitive, Flag::No);
    let flagged = FlaggedColumns::from_rows(&[&a, &b, &c]);

    assert_eq!(flagged.mandatory, vec!["Amount", "Region"]);
    assert_eq!(flagged.currency, vec!["Amount"]);
    assert!(flagged.get(FlagKind::Sensitive).is_empty());
}

#[test]
fn report_stem_drops_only_last_extension() {
    let report = empty_report();
    assert_eq!(report.file_stem(), "sales.2024");
    assert_eq!(report.stats_for(CheckKind::Mandatory).len(), 1);
    assert!(report.stats_for(CheckKind::Unique).is_empty());
}

#[test]
fn report_serializes() {
    let report = empty_report();
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: FileReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn flag_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Flag::Yes).unwrap(), "\"YES\"");
    assert_eq!(Flag::No.as_str(), "NO");
}
