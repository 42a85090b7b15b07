use async_trait::async_trait;
use tracing::info;

use super::{EvaluationClient, EvaluationRequest};
use crate::errors::ReferralResult;
use crate::model::EvaluationRun;

/// Scores in-process and records nothing remotely. Used for offline runs.
#[derive(Debug, Default, Clone)]
pub struct LocalEvaluationClient;

impl LocalEvaluationClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EvaluationClient for LocalEvaluationClient {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn run_evaluation(
        &self,
        request: EvaluationRequest<'_>,
    ) -> ReferralResult<EvaluationRun> {
        request.validate()?;
        let run = request.score();
        let counts = run.counts();
        info!(
            project = %run.project_name,
            run = %run.eval_run_name,
            pass = counts.pass,
            fail = counts.fail,
            error = counts.error,
            "local evaluation finished"
        );
        Ok(run)
    }
}
