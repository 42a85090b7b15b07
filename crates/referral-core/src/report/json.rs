use crate::model::EvaluationRun;
use std::path::Path;

pub fn write_json(run: &EvaluationRun, out: &Path) -> anyhow::Result<()> {
    let counts = run.counts();
    let v = serde_json::json!({
        "project_name": run.project_name,
        "eval_run_name": run.eval_run_name,
        "model": run.model,
        "created_at": run.created_at,
        "summary": {
            "pass": counts.pass,
            "fail": counts.fail,
            "error": counts.error,
        },
        "results": run.results,
    });
    std::fs::write(out, serde_json::to_string_pretty(&v)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EvaluationExample, ExampleResult, ScoreKind, ScorerResult, ScoringOutcome, UserInfo,
    };

    #[test]
    fn test_write_json_contains_summary() {
        let run = EvaluationRun {
            project_name: "referral-agent".into(),
            eval_run_name: "initial-test".into(),
            model: "gpt-4".into(),
            created_at: chrono::Utc::now(),
            results: vec![ExampleResult {
                example: EvaluationExample::new(UserInfo::new(), "x", "x"),
                scorers: vec![ScorerResult {
                    scorer: "ReferralScorer".into(),
                    kind: ScoreKind::Custom,
                    threshold: 0.5,
                    passed: true,
                    outcome: Some(ScoringOutcome::new("ReferralScorer", 1.0, "Perfect match.")),
                    error: None,
                }],
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("run.json");
        write_json(&run, &out).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["summary"]["pass"], 1);
        assert_eq!(v["summary"]["fail"], 0);
        assert_eq!(v["results"][0]["scorers"][0]["outcome"]["score"], 1.0);
        assert_eq!(v["results"][0]["scorers"][0]["kind"], "custom");
    }
}
