//! Weighted quality score.

use serde::{Deserialize, Serialize};

/// Fixed weights of the five score dimensions. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub completeness: f64,
    pub uniqueness: f64,
    pub validity: f64,
    pub outliers: f64,
    pub consistency: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        completeness: 0.25,
        uniqueness: 0.20,
        validity: 0.20,
        outliers: 0.15,
        consistency: 0.20,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-dimension sub-scores on a 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub completeness: f64,
    pub uniqueness: f64,
    pub validity: f64,
    pub outliers: f64,
    pub consistency: f64,
}

impl ComponentScores {
    /// (label, score) pairs in report order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Completeness", self.completeness),
            ("Uniqueness", self.uniqueness),
            ("Validity", self.validity),
            ("Outliers", self.outliers),
            ("Consistency", self.consistency),
        ]
    }

    /// Weighted sum of the sub-scores.
    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        self.completeness * weights.completeness
            + self.uniqueness * weights.uniqueness
            + self.validity * weights.validity
            + self.outliers * weights.outliers
            + self.consistency * weights.consistency
    }
}

/// Composite quality score for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Weighted overall score, rounded to 1 place.
    pub overall_score: f64,
    /// Sub-scores, each rounded to 1 place.
    pub component_scores: ComponentScores,
    /// One message per dimension scoring below 9.
    pub recommendations: Vec<String>,
}
