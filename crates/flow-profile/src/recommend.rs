//! Rule-based recommendations.
//!
//! Rules run over descriptive stats, then outliers, then correlations, and
//! append messages in that order. Nothing is deduplicated: a column can earn
//! several messages.

use flow_model::{CorrelationPair, DescriptiveStat, OutlierResult, format_decimal};

const HIGH_OUTLIER_PERCENT: f64 = 10.0;
const MODERATE_OUTLIER_PERCENT: f64 = 5.0;
const VERY_STRONG_CORRELATION: f64 = 0.95;
const SKEW_RATIO: f64 = 1.5;
const GAP_RATIO: f64 = 10.0;
const MAX_AGE: f64 = 120.0;

fn is_price_column(name: &str) -> bool {
    name.to_lowercase().ends_with("price") || name.contains("($)")
}

fn stat_messages(stat: &DescriptiveStat, out: &mut Vec<String>) {
    let col = &stat.column;

    if stat.std == 0.0 {
        out.push(format!("Column '{col}' has no variation (constant values)"));
    }

    if col == "Quantity" && stat.min < 0.0 {
        out.push(format!("Negative quantities found in '{col}' column"));
    }

    if is_price_column(col) {
        if stat.min < 0.0 {
            out.push(format!("Negative prices found in '{col}' column"));
        }
        if stat.max == 0.0 {
            out.push(format!("Zero prices found in '{col}' column"));
        }
    }

    if col == "Age" && (stat.min < 0.0 || stat.max > MAX_AGE) {
        out.push(format!("Potentially invalid age values in '{col}' column"));
    }

    if stat.mean == stat.median && stat.std > 0.0 {
        out.push(format!(
            "Unusual distribution in '{col}' - mean equals median but variation exists"
        ));
    }

    let high_fence = stat.mean + 3.0 * stat.std;
    if stat.max > high_fence {
        out.push(format!(
            "Column '{col}' has potential high outliers (max: {}, mean + 3σ: {high_fence:.2})",
            format_decimal(stat.max)
        ));
    }
    let low_fence = stat.mean - 3.0 * stat.std;
    if stat.min < low_fence {
        out.push(format!(
            "Column '{col}' has potential low outliers (min: {}, mean - 3σ: {low_fence:.2})",
            format_decimal(stat.min)
        ));
    }

    if stat.mean > stat.median * SKEW_RATIO {
        out.push(format!(
            "Column '{col}' shows significant right skew (mean: {:.2}, median: {:.2})",
            stat.mean, stat.median
        ));
    }
    if stat.median > stat.mean * SKEW_RATIO {
        out.push(format!(
            "Column '{col}' shows significant left skew (mean: {:.2}, median: {:.2})",
            stat.mean, stat.median
        ));
    }

    let range = stat.range();
    let iqr = stat.iqr();
    if iqr > 0.0 && range > iqr * GAP_RATIO {
        out.push(format!(
            "Column '{col}' has large value gaps (range: {range:.2}, IQR: {iqr:.2})"
        ));
    }
}

fn outlier_message(outlier: &OutlierResult) -> Option<String> {
    let level = if outlier.percentage > HIGH_OUTLIER_PERCENT {
        "High"
    } else if outlier.percentage > MODERATE_OUTLIER_PERCENT {
        "Moderate"
    } else {
        return None;
    };
    Some(format!(
        "{level} number of outliers in '{}' ({}% of values) outside [{}, {}]",
        outlier.column,
        format_decimal(outlier.percentage),
        format_decimal(outlier.lower_bound),
        format_decimal(outlier.upper_bound)
    ))
}

fn correlation_message(pair: &CorrelationPair) -> String {
    let r = format_decimal(pair.correlation);
    if pair.correlation.abs() > VERY_STRONG_CORRELATION {
        format!(
            "Very strong correlation ({r}) between '{}' and '{}'. Consider if both columns are necessary.",
            pair.column1, pair.column2
        )
    } else {
        format!(
            "Strong correlation ({r}) between '{}' and '{}'.",
            pair.column1, pair.column2
        )
    }
}

/// Builds the recommendation list for one file.
pub fn generate_recommendations(
    stats: &[DescriptiveStat],
    outliers: &[OutlierResult],
    correlations: &[CorrelationPair],
) -> Vec<String> {
    let mut out = Vec::new();
    for stat in stats {
        stat_messages(stat, &mut out);
    }
    out.extend(outliers.iter().filter_map(outlier_message));
    out.extend(correlations.iter().map(correlation_message));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(column: &str, values: [f64; 7]) -> DescriptiveStat {
        let [mean, median, std, min, max, q1, q3] = values;
        DescriptiveStat {
            column: column.to_string(),
            mean,
            median,
            std,
            min,
            max,
            q1,
            q3,
        }
    }

    #[test]
    fn constant_column() {
        let recs = generate_recommendations(&[stat("Rate", [5.0, 5.0, 0.0, 5.0, 5.0, 5.0, 5.0])], &[], &[]);
        assert_eq!(recs, vec!["Column 'Rate' has no variation (constant values)"]);
    }

    #[test]
    fn price_and_quantity_rules() {
        let recs = generate_recommendations(
            &[
                stat("Quantity", [2.0, 2.5, 1.0, -1.0, 4.0, 1.5, 3.0]),
                stat("Unit Price", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ],
            &[],
            &[],
        );
        assert!(recs.contains(&"Negative quantities found in 'Quantity' column".to_string()));
        assert!(recs.contains(&"Zero prices found in 'Unit Price' column".to_string()));
    }

    #[test]
    fn skew_gap_and_fence_messages() {
        // values 1,2,3,4,5,100
        let recs = generate_recommendations(
            &[stat("Amount", [19.17, 3.5, 36.19, 1.0, 100.0, 2.25, 4.75])],
            &[],
            &[],
        );
        assert_eq!(
            recs,
            vec![
                "Column 'Amount' shows significant right skew (mean: 19.17, median: 3.50)",
                "Column 'Amount' has large value gaps (range: 99.00, IQR: 2.50)",
            ]
        );
    }

    #[test]
    fn both_skews_checked_independently() {
        let recs = generate_recommendations(
            &[stat("Delta", [-4.0, -1.0, 2.0, -6.0, 0.0, -5.0, -0.5])],
            &[],
            &[],
        );
        // mean > 1.5 * median (-4 > -1.5 is false) and median > 1.5 * mean (-1 > -6)
        assert!(recs.iter().any(|r| r.contains("left skew")));
        assert!(!recs.iter().any(|r| r.contains("right skew")));
    }

    #[test]
    fn outlier_levels() {
        let outlier = |pct: f64| OutlierResult {
            column: "Amount".to_string(),
            count: 1,
            percentage: pct,
            lower_bound: -1.5,
            upper_bound: 8.5,
        };
        let recs = generate_recommendations(&[], &[outlier(16.67), outlier(7.0), outlier(5.0)], &[]);
        assert_eq!(
            recs,
            vec![
                "High number of outliers in 'Amount' (16.67% of values) outside [-1.5, 8.5]",
                "Moderate number of outliers in 'Amount' (7.0% of values) outside [-1.5, 8.5]",
            ]
        );
    }

    #[test]
    fn correlation_levels() {
        let pair = |r: f64| CorrelationPair {
            column1: "A".to_string(),
            column2: "B".to_string(),
            correlation: r,
        };
        let recs = generate_recommendations(&[], &[], &[pair(-0.98), pair(0.8)]);
        assert_eq!(
            recs,
            vec![
                "Very strong correlation (-0.98) between 'A' and 'B'. Consider if both columns are necessary.",
                "Strong correlation (0.8) between 'A' and 'B'.",
            ]
        );
    }

    #[test]
    fn age_out_of_range() {
        let recs = generate_recommendations(
            &[
                stat("Age", [60.0, 50.0, 30.0, -2.0, 110.0, 30.0, 90.0]),
                stat("Age", [60.0, 50.0, 30.0, 10.0, 125.0, 30.0, 90.0]),
                stat("Age", [60.0, 50.0, 30.0, 0.0, 120.0, 30.0, 90.0]),
            ],
            &[],
            &[],
        );
        assert_eq!(
            recs,
            vec![
                "Potentially invalid age values in 'Age' column",
                "Potentially invalid age values in 'Age' column",
            ]
        );
    }

    #[test]
    fn mean_equals_median_with_spread() {
        let recs = generate_recommendations(
            &[
                stat("Score", [10.0, 10.0, 2.0, 6.0, 14.0, 8.0, 12.0]),
                stat("Level", [10.0, 10.0, 0.0, 10.0, 10.0, 10.0, 10.0]),
            ],
            &[],
            &[],
        );
        assert_eq!(
            recs,
            vec![
                "Unusual distribution in 'Score' - mean equals median but variation exists",
                "Column 'Level' has no variation (constant values)",
            ]
        );
    }

    #[test]
    fn three_sigma_fences() {
        let recs = generate_recommendations(
            &[
                stat("Load", [10.0, 9.0, 1.5, 8.0, 100.0, 9.0, 9.0]),
                stat("Drift", [10.0, 11.0, 1.5, -20.25, 12.0, 11.0, 11.0]),
            ],
            &[],
            &[],
        );
        assert_eq!(
            recs,
            vec![
                "Column 'Load' has potential high outliers (max: 100.0, mean + 3σ: 14.50)",
                "Column 'Drift' has potential low outliers (min: -20.25, mean - 3σ: 5.50)",
            ]
        );
    }

    #[test]
    fn negative_prices() {
        let recs = generate_recommendations(
            &[
                stat("Unit Price", [5.0, 4.0, 3.0, -2.0, 8.0, 3.0, 6.0]),
                stat("Cost ($)", [5.0, 4.0, 3.0, -2.0, 8.0, 3.0, 6.0]),
                stat("Discount", [5.0, 4.0, 3.0, -2.0, 8.0, 3.0, 6.0]),
            ],
            &[],
            &[],
        );
        assert_eq!(
            recs,
            vec![
                "Negative prices found in 'Unit Price' column",
                "Negative prices found in 'Cost ($)' column",
            ]
        );
    }
}
