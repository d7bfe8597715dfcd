//! Composite greatness score.

use crate::{Rule, RuleOutcome};
use serde::{Deserialize, Serialize};

/// Score at or above which an entity is classified as great.
pub const GREATNESS_THRESHOLD: f64 = 80.0;

/// Composite score of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Percentage of rules passed, in `[0, 100]`. Not rounded.
    pub greatness_score: f64,
    /// Whether `greatness_score >= GREATNESS_THRESHOLD`.
    pub is_great: bool,
}

impl ScoreResult {
    /// Score a rule outcome. Every rule carries equal weight.
    #[must_use]
    pub fn from_outcome(outcome: &RuleOutcome) -> Self {
        let passed = f64::from(outcome.passed_count());
        let greatness_score = 100.0 * passed / Rule::ALL.len() as f64;

        Self {
            greatness_score,
            is_great: greatness_score >= GREATNESS_THRESHOLD,
        }
    }

    /// Score rounded to two decimals, for display.
    #[must_use]
    pub fn display_score(&self) -> f64 {
        (self.greatness_score * 100.0).round() / 100.0
    }
}
