//! Weighted quality score.
//!
//! Validity and outliers are both fed by outlier percentages, so one noisy
//! column costs twice.

use flow_model::{
    ColumnStat, ComponentScores, CorrelationPair, OutlierResult, QualityScore, ScoreWeights,
    round_to,
};

/// Sub-scores below this earn a score recommendation.
const RECOMMEND_BELOW: f64 = 9.0;
const CORRELATION_PENALTY: f64 = 0.5;
const RECOMMENDATION_PENALTY: f64 = 0.2;

/// `10 - mean(percentages) / 10`, clamped to `[0, 10]`; 10 when empty.
fn deduction(percentages: &[f64]) -> f64 {
    if percentages.is_empty() {
        return 10.0;
    }
    let avg = percentages.iter().sum::<f64>() / percentages.len() as f64;
    (10.0 - avg / 10.0).clamp(0.0, 10.0)
}

fn score_recommendations(scores: &ComponentScores) -> Vec<String> {
    [
        (scores.completeness, "Address missing values in mandatory fields"),
        (scores.uniqueness, "Investigate and resolve duplicate records"),
        (scores.validity, "Review and clean invalid data values"),
        (scores.outliers, "Investigate outliers and extreme values"),
        (
            scores.consistency,
            "Review data consistency and correlation patterns",
        ),
    ]
    .into_iter()
    .filter(|(score, _)| *score < RECOMMEND_BELOW)
    .map(|(_, message)| message.to_string())
    .collect()
}

/// Inputs to the scorer, borrowed from the file's results.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub mandatory_stats: &'a [ColumnStat],
    pub unique_stats: &'a [ColumnStat],
    pub outliers: &'a [OutlierResult],
    pub correlations: &'a [CorrelationPair],
    pub recommendation_count: usize,
}

/// Computes the composite score with the given weights.
pub fn quality_score(inputs: &ScoreInputs<'_>, weights: &ScoreWeights) -> QualityScore {
    let null_pcts: Vec<f64> = inputs.mandatory_stats.iter().map(|s| s.percentage).collect();
    let dup_pcts: Vec<f64> = inputs.unique_stats.iter().map(|s| s.percentage).collect();
    let outlier_pcts: Vec<f64> = inputs.outliers.iter().map(|o| o.percentage).collect();

    let penalty = inputs.correlations.len() as f64 * CORRELATION_PENALTY
        + inputs.recommendation_count as f64 * RECOMMENDATION_PENALTY;

    let raw = ComponentScores {
        completeness: deduction(&null_pcts),
        uniqueness: deduction(&dup_pcts),
        validity: deduction(&outlier_pcts),
        outliers: deduction(&outlier_pcts),
        consistency: (10.0 - penalty).max(0.0),
    };

    QualityScore {
        overall_score: round_to(raw.weighted(weights), 1),
        component_scores: ComponentScores {
            completeness: round_to(raw.completeness, 1),
            uniqueness: round_to(raw.uniqueness, 1),
            validity: round_to(raw.validity, 1),
            outliers: round_to(raw.outliers, 1),
            consistency: round_to(raw.consistency, 1),
        },
        recommendations: score_recommendations(&raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(
        mandatory: &'a [ColumnStat],
        outliers: &'a [OutlierResult],
        recommendation_count: usize,
    ) -> ScoreInputs<'a> {
        ScoreInputs {
            mandatory_stats: mandatory,
            unique_stats: &[],
            outliers,
            correlations: &[],
            recommendation_count,
        }
    }

    #[test]
    fn empty_file_scores_ten() {
        let score = quality_score(&inputs(&[], &[], 0), &ScoreWeights::DEFAULT);
        assert_eq!(score.overall_score, 10.0);
        assert!(score.recommendations.is_empty());
    }

    #[test]
    fn completeness_from_null_percentage() {
        let mandatory = [ColumnStat::new("Amount", 1, 3, "(1 null values)")];
        let score = quality_score(&inputs(&mandatory, &[], 0), &ScoreWeights::DEFAULT);
        assert_eq!(score.component_scores.completeness, 6.7);
        assert_eq!(
            score.recommendations,
            vec!["Address missing values in mandatory fields"]
        );
    }

    #[test]
    fn outliers_feed_validity_and_outliers() {
        let outliers = [OutlierResult {
            column: "Amount".to_string(),
            count: 1,
            percentage: 16.67,
            lower_bound: -1.5,
            upper_bound: 8.5,
        }];
        let score = quality_score(&inputs(&[], &outliers, 2), &ScoreWeights::DEFAULT);
        assert_eq!(score.component_scores.validity, 8.3);
        assert_eq!(score.component_scores.outliers, 8.3);
        assert_eq!(score.component_scores.consistency, 9.6);
        // 0.25*10 + 0.20*10 + 0.20*8.333 + 0.15*8.333 + 0.20*9.6
        assert_eq!(score.overall_score, 9.3);
    }

    #[test]
    fn consistency_floors_at_zero() {
        let score = quality_score(&inputs(&[], &[], 80), &ScoreWeights::DEFAULT);
        assert_eq!(score.component_scores.consistency, 0.0);
        assert!(
            score
                .recommendations
                .contains(&"Review data consistency and correlation patterns".to_string())
        );
    }
}
