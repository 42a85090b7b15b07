use referral_core::metrics_api::Scorer;
use referral_core::model::{EvaluationExample, ScoreKind, ScoringOutcome};
use tracing::debug;

pub const NAME: &str = "ReferralScorer";
pub const THRESHOLD: f64 = 0.5;
pub const PERFECT_MATCH: &str = "Perfect match.";
pub const MISMATCH: &str = "Mismatch between actual and ideal output.";

/// Strict comparison of `actual` against `ideal` after trimming and lowercasing.
///
/// Internal whitespace and punctuation are compared as-is, so the score is
/// always exactly 0.0 or 1.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatchScorer;

impl ExactMatchScorer {
    pub fn new() -> Self {
        Self
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl Scorer for ExactMatchScorer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn kind(&self) -> ScoreKind {
        ScoreKind::Custom
    }

    fn threshold(&self) -> f64 {
        THRESHOLD
    }

    fn score(&self, example: &EvaluationExample) -> anyhow::Result<ScoringOutcome> {
        debug!(scorer = NAME, "running exact-match scorer");
        let actual = normalize(example.actual()?);
        let ideal = normalize(example.ideal()?);

        let outcome = if actual == ideal {
            ScoringOutcome::new(NAME, 1.0, PERFECT_MATCH)
        } else {
            ScoringOutcome::new(NAME, 0.0, MISMATCH)
        };
        Ok(outcome)
    }
}
