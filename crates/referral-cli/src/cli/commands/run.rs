use std::sync::Arc;

use anyhow::Context;
use referral_core::client::{EvaluationClient, HttpEvaluationClient, LocalEvaluationClient};
use referral_core::config::{load_config, EvalConfig};
use referral_core::driver::Driver;
use referral_core::report::json::write_json;
use referral_core::ReferralError;
use referral_metrics::default_scorers;
use tracing::info;

use super::load_user_info;
use crate::cli::args::RunArgs;
use crate::exit_codes;

/// File (or defaults), then `JUDGMENT_*` environment, then flags.
pub(crate) fn resolve_config(args: &RunArgs) -> anyhow::Result<EvalConfig> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => EvalConfig::default(),
    };
    let mut cfg = base.apply_env();
    if let Some(v) = &args.project_name {
        cfg.project_name = v.clone();
    }
    if let Some(v) = &args.eval_run_name {
        cfg.eval_run_name = v.clone();
    }
    if let Some(v) = &args.model {
        cfg.model = v.clone();
    }
    Ok(cfg)
}

pub async fn cmd_run(args: RunArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(&args)?;
    let user_info = load_user_info(&args.input)?;

    let client: Arc<dyn EvaluationClient> = if args.offline {
        Arc::new(LocalEvaluationClient::new())
    } else {
        Arc::new(HttpEvaluationClient::new(&cfg)?)
    };
    info!(client = client.name(), config = ?cfg, "evaluation client ready");

    let mut driver = Driver::new(cfg, client, default_scorers());
    if let Some(path) = &args.ideal {
        let ideal = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read reference email {}", path.display()))?;
        driver = driver.with_ideal(ideal);
    }

    let mut stdout = std::io::stdout();
    let outcome = match driver.run(user_info, &mut stdout).await {
        Ok(outcome) => outcome,
        Err(ReferralError::GenerationFailed) => return Ok(exit_codes::GENERATION_FAILED),
        Err(e) => return Err(e.into()),
    };

    if let (Some(path), Some(run)) = (&args.json, outcome.run()) {
        write_json(run, path)?;
    }
    Ok(outcome.exit_code())
}
