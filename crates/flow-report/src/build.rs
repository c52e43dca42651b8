//! Builds a [`Document`] from a [`FileReport`].

use flow_model::{CheckKind, ColumnStat, CurrencyStat, FileReport, FlagKind, format_decimal};

use crate::document::{Block, Document, Fact, Section, SectionStyle, TableStyle};

const NO_DATA: &str = "No data available for this section";

const CHECK_HEADERS: [&str; 5] = [
    "Column Name",
    "Total Records",
    "Count",
    "Percentage",
    "Details",
];

/// `1234567` as `1,234,567`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn check_title(kind: CheckKind) -> &'static str {
    match kind {
        CheckKind::Mandatory => "Null Check",
        CheckKind::Unique => "Duplicate Check",
        CheckKind::Sensitive => "Sensitive Data Check",
        CheckKind::Encrypted => "Encryption Check",
    }
}

fn header_section(report: &FileReport) -> Section {
    let flagged = &report.flagged;
    let facts = vec![
        Fact::value("Total Rows", thousands(report.total_rows)),
        Fact::value("Total Columns", thousands(report.total_columns)),
        Fact::value("Unique Columns", thousands(report.unique_columns)),
        Fact::list("Missing Columns", &report.missing_columns),
        Fact::list("Additional Columns", &report.additional_columns),
        Fact::list("Mandatory Columns", flagged.get(FlagKind::Mandatory)),
        Fact::list("Unique Columns (Metadata)", flagged.get(FlagKind::Unique)),
        Fact::list("Sensitive Columns", flagged.get(FlagKind::Sensitive)),
        Fact::list("Encrypted Columns", flagged.get(FlagKind::Encrypted)),
        Fact::list("Currency Columns", flagged.get(FlagKind::Currency)),
    ];

    Section::new(SectionStyle::Header, "Data Quality Report")
        .with(Block::paragraph(format!("File: {}", report.file_name)))
        .with(Block::paragraph(format!("Generated: {}", report.generated_at)))
        .with(Block::paragraph(format!(
            "Source SHA-256: {}",
            report.source_sha256
        )))
        .with(Block::Facts { rows: facts })
}

fn score_section(report: &FileReport) -> Section {
    let score = &report.quality_score;
    let rows = score
        .component_scores
        .entries()
        .into_iter()
        .map(|(label, value)| vec![label.to_string(), format!("{value:.1}")])
        .collect();

    Section::new(SectionStyle::Analysis, "Data Quality Score")
        .with(Block::Score {
            text: format!("Overall Score: {:.1}", score.overall_score),
        })
        .with(Block::Heading {
            text: "Component Scores:".to_string(),
        })
        .with(Block::Table {
            style: TableStyle::Score,
            headers: vec!["Metric".to_string(), "Score".to_string()],
            rows,
        })
        .with(Block::Heading {
            text: "Score Recommendations:".to_string(),
        })
        .with(Block::list_or(
            &score.recommendations,
            "No score recommendations",
        ))
}

fn check_rows(stats: &[ColumnStat]) -> Vec<Vec<String>> {
    stats
        .iter()
        .map(|stat| {
            vec![
                stat.column.clone(),
                thousands(stat.total_records),
                thousands(stat.count),
                format!("{:.2}%", stat.percentage),
                stat.detail.clone(),
            ]
        })
        .collect()
}

fn check_section(kind: CheckKind, stats: &[ColumnStat]) -> Section {
    Section::new(SectionStyle::Check, check_title(kind)).with(Block::table_or(
        &CHECK_HEADERS,
        check_rows(stats),
        NO_DATA,
    ))
}

fn counted(count: u64, pct: f64) -> String {
    format!("{} ({pct:.2}%)", thousands(count))
}

fn currency_section(stats: &[CurrencyStat]) -> Section {
    let rows = stats
        .iter()
        .map(|stat| {
            vec![
                stat.column.clone(),
                stat.currency.clone(),
                thousands(stat.total_records),
                counted(stat.invalid_format, stat.invalid_percentage),
                counted(stat.negative_values, stat.negative_percentage),
                counted(stat.zero_values, stat.zero_percentage),
                counted(stat.valid_values, stat.valid_percentage),
            ]
        })
        .collect();

    Section::new(SectionStyle::Check, "Currency Format Check").with(Block::table_or(
        &[
            "Column Name",
            "Currency",
            "Total Records",
            "Invalid Format",
            "Negative Values",
            "Zero Values",
            "Valid Values",
        ],
        rows,
        NO_DATA,
    ))
}

fn descriptive_section(report: &FileReport) -> Section {
    let rows = report
        .descriptive_stats
        .iter()
        .map(|s| {
            let mut row = vec![s.column.clone()];
            row.extend(
                [s.mean, s.median, s.std, s.min, s.max, s.q1, s.q3]
                    .into_iter()
                    .map(format_decimal),
            );
            row
        })
        .collect();

    Section::new(SectionStyle::Analysis, "Descriptive Statistics").with(Block::table_or(
        &["Column", "Mean", "Median", "Std Dev", "Min", "Max", "Q1", "Q3"],
        rows,
        "No numeric columns available for analysis",
    ))
}

fn outlier_section(report: &FileReport) -> Section {
    let rows = report
        .outliers
        .iter()
        .map(|o| {
            vec![
                o.column.clone(),
                thousands(o.count),
                format!("{}%", format_decimal(o.percentage)),
                format_decimal(o.lower_bound),
                format_decimal(o.upper_bound),
            ]
        })
        .collect();

    Section::new(SectionStyle::Analysis, "Outlier Analysis").with(Block::table_or(
        &[
            "Column",
            "Outlier Count",
            "Percentage",
            "Lower Bound",
            "Upper Bound",
        ],
        rows,
        "No numeric columns available for outlier analysis",
    ))
}

fn correlation_section(report: &FileReport) -> Section {
    let rows = report
        .correlations
        .iter()
        .map(|c| {
            vec![
                c.column1.clone(),
                c.column2.clone(),
                format_decimal(c.correlation),
            ]
        })
        .collect();

    Section::new(SectionStyle::Analysis, "Correlation Analysis").with(Block::table_or(
        &["Column 1", "Column 2", "Correlation"],
        rows,
        "No significant correlations found",
    ))
}

/// Lays out every report section in display order.
///
/// Sections are always present; empty results become placeholders.
pub fn build_document(report: &FileReport) -> Document {
    let mut sections = vec![header_section(report), score_section(report)];
    sections.extend(
        CheckKind::ALL
            .into_iter()
            .map(|kind| check_section(kind, report.stats_for(kind))),
    );
    sections.push(currency_section(&report.currency_stats));
    sections.push(descriptive_section(report));
    sections.push(outlier_section(report));
    sections.push(correlation_section(report));
    sections.push(
        Section::new(SectionStyle::Analysis, "Recommendations").with(Block::list_or(
            &report.recommendations,
            "No specific recommendations generated",
        )),
    );

    Document {
        title: format!("Data Quality Report - {}", report.file_name),
        sections,
    }
}
