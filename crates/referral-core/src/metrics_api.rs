use crate::model::{EvaluationExample, ScoreKind, ScoringOutcome};

/// A pluggable grader for one example.
///
/// `kind` and `threshold` are static metadata reported with every result;
/// the threshold is applied by the caller through [`ScoringOutcome::passed`],
/// never inside `score`.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;
    fn kind(&self) -> ScoreKind;
    fn threshold(&self) -> f64;
    fn score(&self, example: &EvaluationExample) -> anyhow::Result<ScoringOutcome>;
}
