use crate::model::EvaluationRun;
use std::io::{self, Write};

pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate referral email. Please check your input or generation logic.";
pub const EVALUATION_COMPLETED_MESSAGE: &str = "Evaluation completed.";

pub fn print_email(out: &mut dyn Write, email: &str) -> io::Result<()> {
    writeln!(out, "\nGenerated Email:\n")?;
    writeln!(out, "{}", email)
}

pub fn print_generation_failure(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", GENERATION_FAILED_MESSAGE)
}

pub fn print_evaluation_completed(out: &mut dyn Write, run: &EvaluationRun) -> io::Result<()> {
    writeln!(out, "\n{}", EVALUATION_COMPLETED_MESSAGE)?;
    print_summary(out, run)
}

pub fn print_evaluation_failed(out: &mut dyn Write, error: &str) -> io::Result<()> {
    writeln!(out, "Evaluation failed: {}", error)
}

/// One line per scorer result, then the totals.
pub fn print_summary(out: &mut dyn Write, run: &EvaluationRun) -> io::Result<()> {
    for r in run.results.iter().flat_map(|e| e.scorers.iter()) {
        match (&r.outcome, &r.error) {
            (Some(o), _) => writeln!(
                out,
                "  {} score={:.1} passed={} ({})",
                r.scorer, o.score, r.passed, o.reasoning
            )?,
            (None, Some(e)) => writeln!(out, "  {} error: {}", r.scorer, e)?,
            (None, None) => writeln!(out, "  {} no result", r.scorer)?,
        }
    }
    let c = run.counts();
    writeln!(
        out,
        "Results: pass={} fail={} error={}",
        c.pass, c.fail, c.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EvaluationExample, ExampleResult, ScoreKind, ScorerResult, ScoringOutcome, UserInfo,
    };

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_lines() {
        let run = EvaluationRun {
            project_name: "p".into(),
            eval_run_name: "r".into(),
            model: "m".into(),
            created_at: chrono::Utc::now(),
            results: vec![ExampleResult {
                example: EvaluationExample::new(UserInfo::new(), "a", "b"),
                scorers: vec![
                    ScorerResult {
                        scorer: "ReferralScorer".into(),
                        kind: ScoreKind::Custom,
                        threshold: 0.5,
                        passed: false,
                        outcome: Some(ScoringOutcome::new(
                            "ReferralScorer",
                            0.0,
                            "Mismatch between actual and ideal output.",
                        )),
                        error: None,
                    },
                    ScorerResult {
                        scorer: "other".into(),
                        kind: ScoreKind::Custom,
                        threshold: 0.5,
                        passed: false,
                        outcome: None,
                        error: Some("boom".into()),
                    },
                ],
            }],
        };

        let text = render(|out| print_evaluation_completed(out, &run));
        assert!(text.starts_with("\nEvaluation completed.\n"));
        assert!(text.contains(
            "ReferralScorer score=0.0 passed=false (Mismatch between actual and ideal output.)"
        ));
        assert!(text.contains("other error: boom"));
        assert!(text.ends_with("Results: pass=0 fail=1 error=1\n"));
    }

    #[test]
    fn test_email_banner() {
        let text = render(|out| print_email(out, "Hi"));
        assert_eq!(text, "\nGenerated Email:\n\nHi\n");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            render(|out| print_generation_failure(out)),
            format!("{}\n", GENERATION_FAILED_MESSAGE)
        );
        assert_eq!(
            render(|out| print_evaluation_failed(out, "network error: down")),
            "Evaluation failed: network error: down\n"
        );
    }
}
