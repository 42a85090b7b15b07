//! Sequences one run: build the input, generate the email, evaluate it.
//!
//! Generation failure is the only fatal path. Evaluation errors are reported
//! and swallowed.

use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::client::{EvaluationClient, EvaluationRequest};
use crate::compose::generate_referral_email;
use crate::config::EvalConfig;
use crate::errors::{ReferralError, ReferralResult};
use crate::metrics_api::Scorer;
use crate::model::{EvaluationExample, EvaluationRun, UserInfo};
use crate::report::console;

pub type Composer = fn(&UserInfo) -> String;

#[derive(Debug, Clone)]
pub enum EvaluationStatus {
    Completed(EvaluationRun),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DriverOutcome {
    pub email: String,
    pub evaluation: EvaluationStatus,
}

impl DriverOutcome {
    /// Evaluation failures do not change the exit status.
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn run(&self) -> Option<&EvaluationRun> {
        match &self.evaluation {
            EvaluationStatus::Completed(run) => Some(run),
            EvaluationStatus::Failed(_) => None,
        }
    }
}

pub struct Driver {
    config: EvalConfig,
    client: Arc<dyn EvaluationClient>,
    scorers: Vec<Arc<dyn Scorer>>,
    composer: Composer,
    ideal: Option<String>,
}

impl Driver {
    pub fn new(
        config: EvalConfig,
        client: Arc<dyn EvaluationClient>,
        scorers: Vec<Arc<dyn Scorer>>,
    ) -> Self {
        Self {
            config,
            client,
            scorers,
            composer: generate_referral_email,
            ideal: None,
        }
    }

    pub fn with_composer(mut self, composer: Composer) -> Self {
        self.composer = composer;
        self
    }

    /// Compare against an independent reference instead of the generated email itself.
    pub fn with_ideal(mut self, ideal: impl Into<String>) -> Self {
        self.ideal = Some(ideal.into());
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn generate(&self, user_info: &UserInfo) -> ReferralResult<String> {
        let email = (self.composer)(user_info);
        if email.is_empty() {
            error!("composer returned an empty email");
            return Err(ReferralError::GenerationFailed);
        }
        Ok(email)
    }

    /// Build the example for `email` and hand it to the evaluation client.
    pub async fn evaluate(&self, user_info: UserInfo, email: &str) -> EvaluationStatus {
        let ideal = self.ideal.clone().unwrap_or_else(|| email.to_string());
        let examples = vec![EvaluationExample::new(user_info, ideal, email)];
        let request = EvaluationRequest::from_config(&self.config, &examples, &self.scorers);

        info!(
            client = self.client.name(),
            project = %self.config.project_name,
            run = %self.config.eval_run_name,
            model = %self.config.model,
            "running evaluation"
        );

        match self.client.run_evaluation(request).await {
            Ok(run) => EvaluationStatus::Completed(run),
            Err(e) => {
                warn!(client = self.client.name(), error = %e, "evaluation failed");
                EvaluationStatus::Failed(e.to_string())
            }
        }
    }

    /// Generate, print, evaluate, print. Returns `GenerationFailed` without
    /// touching the evaluation client when the composer yields nothing.
    pub async fn run(
        &self,
        user_info: UserInfo,
        out: &mut dyn Write,
    ) -> ReferralResult<DriverOutcome> {
        let email = match self.generate(&user_info) {
            Ok(email) => email,
            Err(e) => {
                console::print_generation_failure(out)?;
                return Err(e);
            }
        };
        console::print_email(out, &email)?;

        let evaluation = self.evaluate(user_info, &email).await;
        match &evaluation {
            EvaluationStatus::Completed(run) => console::print_evaluation_completed(out, run)?,
            EvaluationStatus::Failed(msg) => console::print_evaluation_failed(out, msg)?,
        }

        Ok(DriverOutcome { email, evaluation })
    }
}
