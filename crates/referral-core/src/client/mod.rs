//! Evaluation clients: where examples meet scorers and results get recorded.

mod http;
mod local;

pub use http::{HttpEvaluationClient, LOG_EVAL_RESULTS_PATH, USER_AGENT_VALUE};
pub use local::LocalEvaluationClient;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::config::EvalConfig;
use crate::errors::{ReferralError, ReferralResult};
use crate::metrics_api::Scorer;
use crate::model::{EvaluationExample, EvaluationRun, ExampleResult, ScorerResult};

/// Everything one evaluation call needs.
#[derive(Clone)]
pub struct EvaluationRequest<'a> {
    pub examples: &'a [EvaluationExample],
    pub scorers: &'a [Arc<dyn Scorer>],
    pub model: &'a str,
    pub project_name: &'a str,
    pub eval_run_name: &'a str,
    pub override_existing: bool,
    pub append: bool,
    pub async_execution: bool,
}

impl<'a> EvaluationRequest<'a> {
    /// Run metadata taken from `config`.
    pub fn from_config(
        config: &'a EvalConfig,
        examples: &'a [EvaluationExample],
        scorers: &'a [Arc<dyn Scorer>],
    ) -> Self {
        Self {
            examples,
            scorers,
            model: &config.model,
            project_name: &config.project_name,
            eval_run_name: &config.eval_run_name,
            override_existing: config.override_existing,
            append: config.append,
            async_execution: config.async_execution,
        }
    }

    pub fn validate(&self) -> ReferralResult<()> {
        if self.async_execution {
            return Err(ReferralError::Unsupported {
                message: "async execution is not supported; evaluations run synchronously"
                    .to_string(),
            });
        }
        if self.override_existing && self.append {
            return Err(ReferralError::Config {
                message: "'override' and 'append' are mutually exclusive".to_string(),
            });
        }
        if self.examples.is_empty() {
            return Err(ReferralError::Config {
                message: "evaluation has no examples".to_string(),
            });
        }
        if self.scorers.is_empty() {
            return Err(ReferralError::Config {
                message: "evaluation has no scorers".to_string(),
            });
        }
        Ok(())
    }

    /// Score every example locally and package the results as a run.
    pub fn score(&self) -> EvaluationRun {
        EvaluationRun {
            project_name: self.project_name.to_string(),
            eval_run_name: self.eval_run_name.to_string(),
            model: self.model.to_string(),
            created_at: Utc::now(),
            results: score_examples(self.examples, self.scorers),
        }
    }
}

/// The collaborator that runs examples through scorers and records the outcome.
///
/// `Ok` means the evaluation was accepted; callers do not depend on the run's shape.
#[async_trait]
pub trait EvaluationClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run_evaluation(
        &self,
        request: EvaluationRequest<'_>,
    ) -> ReferralResult<EvaluationRun>;
}

/// Apply each scorer to each example. A scorer error is recorded on its result
/// and does not stop the remaining scorers.
pub fn score_examples(
    examples: &[EvaluationExample],
    scorers: &[Arc<dyn Scorer>],
) -> Vec<ExampleResult> {
    examples
        .iter()
        .map(|example| ExampleResult {
            example: example.clone(),
            scorers: scorers
                .iter()
                .map(|scorer| score_one(scorer.as_ref(), example))
                .collect(),
        })
        .collect()
}

fn score_one(scorer: &dyn Scorer, example: &EvaluationExample) -> ScorerResult {
    debug!(scorer = scorer.name(), "running scorer");
    match scorer.score(example) {
        Ok(outcome) => ScorerResult {
            scorer: scorer.name().to_string(),
            kind: scorer.kind(),
            threshold: scorer.threshold(),
            passed: outcome.passed(scorer.threshold()),
            outcome: Some(outcome),
            error: None,
        },
        Err(e) => {
            warn!(scorer = scorer.name(), error = %e, "scorer failed");
            ScorerResult {
                scorer: scorer.name().to_string(),
                kind: scorer.kind(),
                threshold: scorer.threshold(),
                passed: false,
                outcome: None,
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScoreKind, ScoringOutcome, UserInfo};

    struct Fixed(f64);

    impl Scorer for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn kind(&self) -> ScoreKind {
            ScoreKind::Custom
        }
        fn threshold(&self) -> f64 {
            0.5
        }
        fn score(&self, _example: &EvaluationExample) -> anyhow::Result<ScoringOutcome> {
            Ok(ScoringOutcome::new("fixed", self.0, "fixed"))
        }
    }

    struct Failing;

    impl Scorer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn kind(&self) -> ScoreKind {
            ScoreKind::Custom
        }
        fn threshold(&self) -> f64 {
            0.5
        }
        fn score(&self, example: &EvaluationExample) -> anyhow::Result<ScoringOutcome> {
            example.actual()?;
            anyhow::bail!("unreachable in these tests")
        }
    }

    #[test]
    fn test_score_examples_applies_threshold() {
        let examples = vec![EvaluationExample::new(UserInfo::new(), "a", "a")];
        let scorers: Vec<Arc<dyn Scorer>> = vec![Arc::new(Fixed(0.5)), Arc::new(Fixed(0.4))];
        let results = score_examples(&examples, &scorers);
        assert_eq!(results.len(), 1);
        assert!(results[0].scorers[0].passed);
        assert!(!results[0].scorers[1].passed);
    }

    #[test]
    fn test_scorer_error_is_recorded() {
        let examples = vec![EvaluationExample::default()];
        let scorers: Vec<Arc<dyn Scorer>> = vec![Arc::new(Failing), Arc::new(Fixed(1.0))];
        let results = score_examples(&examples, &scorers);
        let failed = &results[0].scorers[0];
        assert!(!failed.passed);
        assert!(failed.outcome.is_none());
        assert!(failed.error.as_deref().unwrap().contains("'actual'"));
        assert!(results[0].scorers[1].passed);
    }

    #[test]
    fn test_validate_rejects_async_and_empty() {
        let cfg = EvalConfig::default();
        let examples = vec![EvaluationExample::new(UserInfo::new(), "a", "a")];
        let scorers: Vec<Arc<dyn Scorer>> = vec![Arc::new(Fixed(1.0))];

        assert!(EvaluationRequest::from_config(&cfg, &examples, &scorers)
            .validate()
            .is_ok());
        assert!(matches!(
            EvaluationRequest::from_config(&cfg, &[], &scorers).validate(),
            Err(ReferralError::Config { .. })
        ));
        assert!(matches!(
            EvaluationRequest::from_config(&cfg, &examples, &[]).validate(),
            Err(ReferralError::Config { .. })
        ));

        let async_cfg = EvalConfig::default().with_async_execution(true);
        assert!(matches!(
            EvaluationRequest::from_config(&async_cfg, &examples, &scorers).validate(),
            Err(ReferralError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_override_with_append() {
        let mut cfg = EvalConfig::default();
        cfg.append = true;
        let examples = vec![EvaluationExample::new(UserInfo::new(), "a", "a")];
        let scorers: Vec<Arc<dyn Scorer>> = vec![Arc::new(Fixed(1.0))];
        assert!(matches!(
            EvaluationRequest::from_config(&cfg, &examples, &scorers).validate(),
            Err(ReferralError::Config { .. })
        ));
    }
}
