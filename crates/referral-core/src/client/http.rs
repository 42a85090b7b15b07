//! HTTP client for the hosted evaluation service.
//!
//! Custom scorers run client-side; the service only receives the scored
//! results for storage and display.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde_json::json;
use tracing::{debug, info};

use super::{EvaluationClient, EvaluationRequest};
use crate::config::EvalConfig;
use crate::errors::{ReferralError, ReferralResult};
use crate::model::EvaluationRun;

/// User agent for evaluation requests.
pub const USER_AGENT_VALUE: &str = concat!("referral-eval/", env!("CARGO_PKG_VERSION"));

/// Endpoint receiving locally scored results.
pub const LOG_EVAL_RESULTS_PATH: &str = "/log_eval_results/";

const ORG_ID_HEADER: &str = "x-organization-id";

#[derive(Debug, Clone)]
pub struct HttpEvaluationClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    org_id: Option<String>,
}

impl HttpEvaluationClient {
    pub fn new(config: &EvalConfig) -> ReferralResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ReferralError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            org_id: config.org_id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    async fn upload(
        &self,
        api_key: &str,
        run: &EvaluationRun,
        request: &EvaluationRequest<'_>,
    ) -> ReferralResult<()> {
        let url = format!("{}{}", self.base_url, LOG_EVAL_RESULTS_PATH);
        debug!(url = %url, results = run.results.len(), "uploading evaluation results");

        let body = json!({
            "project_name": run.project_name,
            "eval_name": run.eval_run_name,
            "model": run.model,
            "override": request.override_existing,
            "append": request.append,
            "created_at": run.created_at,
            "results": run.results,
        });

        let mut req = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&body);
        if let Some(org_id) = &self.org_id {
            req = req.header(ORG_ID_HEADER, org_id);
        }

        let response = req.send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => Ok(()),
            401 | 403 => Err(ReferralError::Unauthorized {
                message: "invalid API key or organization id".to_string(),
            }),
            _ => {
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(ReferralError::Network {
                    message: format!("HTTP {}: {}", status.as_u16(), message),
                })
            }
        }
    }
}

#[async_trait]
impl EvaluationClient for HttpEvaluationClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn run_evaluation(
        &self,
        request: EvaluationRequest<'_>,
    ) -> ReferralResult<EvaluationRun> {
        request.validate()?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ReferralError::Unauthorized {
                message: "JUDGMENT_API_KEY is not set".to_string(),
            })?;

        let run = request.score();
        self.upload(api_key, &run, &request).await?;

        info!(
            project = %run.project_name,
            run = %run.eval_run_name,
            "evaluation results uploaded"
        );
        Ok(run)
    }
}
