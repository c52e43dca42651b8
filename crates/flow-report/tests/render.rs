//! Document layout and HTML output for small reports.

use flow_model::{
    ColumnStat, ComponentScores, CorrelationPair, DescriptiveStat, FileReport, FlaggedColumns,
    OutlierResult, QualityScore,
};
use flow_report::{
    Block, build_document, render_html, report_file_name, write_report, write_report_json,
};
use tempfile::TempDir;

fn minimal_report() -> FileReport {
    FileReport {
        file_name: "sales.csv".to_string(),
        file_path: "raw/sales.csv".to_string(),
        source_sha256: "abc123".to_string(),
        generated_at: "2026-01-01 00:00:00".to_string(),
        total_rows: 1200,
        total_columns: 2,
        unique_columns: 2,
        flagged: FlaggedColumns {
            mandatory: vec!["Amount".to_string()],
            ..FlaggedColumns::default()
        },
        missing_columns: vec!["Region".to_string()],
        additional_columns: vec![],
        mandatory_stats: vec![ColumnStat::new("Amount", 0, 1200, "(0 null values)")],
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

fn numeric_report() -> FileReport {
    let mut report = minimal_report();
    report.descriptive_stats = vec![DescriptiveStat {
        column: "Amount".to_string(),
        mean: 12.0,
        median: 3.0,
        std: 1.5,
        min: 1.0,
        max: 100.0,
        q1: 2.0,
        q3: 4.5,
    }];
    report.outliers = vec![OutlierResult {
        column: "Amount".to_string(),
        count: 1,
        percentage: 16.67,
        lower_bound: -1.75,
        upper_bound: 8.25,
    }];
    report.correlations = vec![CorrelationPair {
        column1: "Amount".to_string(),
        column2: "Dose".to_string(),
        correlation: 1.0,
    }];
    report.recommendations = vec!["Column Amount has 1 outliers (16.67%)".to_string()];
    report
}

#[test]
fn document_tree() {
    let document = build_document(&minimal_report());
    insta::assert_json_snapshot!(document);
}

#[test]
fn every_section_is_present_in_order() {
    let document = build_document(&numeric_report());
    let titles: Vec<&str> = document.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Data Quality Report",
            "Data Quality Score",
            "Null Check",
            "Duplicate Check",
            "Sensitive Data Check",
            "Encryption Check",
            "Currency Format Check",
            "Descriptive Statistics",
            "Outlier Analysis",
            "Correlation Analysis",
            "Recommendations",
        ]
    );
}

#[test]
fn numeric_tables_use_decimal_text() {
    let document = build_document(&numeric_report());
    let rows_of = |title: &str| match &document
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap()
        .blocks[0]
    {
        Block::Table { rows, .. } => rows.clone(),
        other => panic!("expected table, got {other:?}"),
    };

    assert_eq!(
        rows_of("Descriptive Statistics")[0],
        vec!["Amount", "12.0", "3.0", "1.5", "1.0", "100.0", "2.0", "4.5"]
    );
    assert_eq!(
        rows_of("Outlier Analysis")[0],
        vec!["Amount", "1", "16.67%", "-1.75", "8.25"]
    );
    assert_eq!(
        rows_of("Correlation Analysis")[0],
        vec!["Amount", "Dose", "1.0"]
    );
}

#[test]
fn rendering_is_byte_identical_for_a_fixed_timestamp() {
    let report = numeric_report();
    let first = render_html(&build_document(&report)).unwrap();
    let second = render_html(&build_document(&report)).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("<p>Generated: 2026-01-01 00:00:00</p>"));
    assert!(first.contains(r#"<div class="overall-score">Overall Score: 10.0</div>"#));
    assert!(first.contains("<td>1,200</td>"));
    assert!(first.contains(r#"<p class="no-data">No data available for this section</p>"#));
}

#[test]
fn writes_html_and_json_under_report_names() {
    let dir = TempDir::new().unwrap();
    let report = numeric_report();

    let html = write_report(dir.path(), &report).unwrap();
    assert_eq!(html, dir.path().join(report_file_name("sales.csv")));
    let content = std::fs::read_to_string(&html).unwrap();
    assert!(content.contains("<h3>Null Check</h3>"));

    let json = write_report_json(dir.path(), &report).unwrap();
    assert_eq!(json, dir.path().join("reports_sales.json"));
    let parsed: FileReport = serde_json::from_str(&std::fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(parsed, report);
}
