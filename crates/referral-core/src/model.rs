use crate::errors::{ReferralError, ReferralResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input describing who is asked for a referral, where, and why.
///
/// Every field is optional. The composer substitutes a default for any field
/// that is absent or empty, so no combination of fields is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_name: Option<String>,
    /// Accepted for completeness; the current template does not render it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_context: Option<String>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hard-coded scenario the `run` command evaluates by default.
    pub fn canned_scenario() -> Self {
        Self::new()
            .with_your_name("Pooja")
            .with_target_name("Ravi")
            .with_target_company("Google")
            .with_target_role("Software Engineer")
            .with_shared_context("We both went to GITAM")
            .with_reason("Google's AI research and culture")
    }

    /// Build from an arbitrary JSON value without failing.
    ///
    /// Known keys holding a string are taken as-is; anything else (missing
    /// keys, numbers, nulls, nested objects, a non-object root) is treated as
    /// absent so the composer falls back to its defaults.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(ToString::to_string)
        };
        Self {
            target_name: field("target_name"),
            target_company: field("target_company"),
            target_role: field("target_role"),
            reason: field("reason"),
            your_name: field("your_name"),
            shared_context: field("shared_context"),
        }
    }

    pub fn with_target_name(mut self, v: impl Into<String>) -> Self {
        self.target_name = Some(v.into());
        self
    }

    pub fn with_target_company(mut self, v: impl Into<String>) -> Self {
        self.target_company = Some(v.into());
        self
    }

    pub fn with_target_role(mut self, v: impl Into<String>) -> Self {
        self.target_role = Some(v.into());
        self
    }

    pub fn with_reason(mut self, v: impl Into<String>) -> Self {
        self.reason = Some(v.into());
        self
    }

    pub fn with_your_name(mut self, v: impl Into<String>) -> Self {
        self.your_name = Some(v.into());
        self
    }

    pub fn with_shared_context(mut self, v: impl Into<String>) -> Self {
        self.shared_context = Some(v.into());
        self
    }
}

/// One graded case: the input that produced `actual`, and the reference it is compared to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationExample {
    #[serde(default)]
    pub input: UserInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl EvaluationExample {
    pub fn new(input: UserInfo, ideal: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            input,
            ideal: Some(ideal.into()),
            actual: Some(actual.into()),
        }
    }

    pub fn actual(&self) -> ReferralResult<&str> {
        self.actual
            .as_deref()
            .ok_or(ReferralError::InvalidInputKind { field: "actual" })
    }

    pub fn ideal(&self) -> ReferralResult<&str> {
        self.ideal
            .as_deref()
            .ok_or(ReferralError::InvalidInputKind { field: "ideal" })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Custom,
}

impl ScoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Custom => "custom",
        }
    }
}

/// Result of one scorer on one example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub name: String,
    pub score: f64,
    pub reasoning: String,
}

impl ScoringOutcome {
    pub fn new(name: impl Into<String>, score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            reasoning: reasoning.into(),
        }
    }

    pub fn passed(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// A scorer's verdict as recorded in a run. Exactly one of `outcome` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerResult {
    pub scorer: String,
    pub kind: ScoreKind,
    pub threshold: f64,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ScoringOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleResult {
    pub example: EvaluationExample,
    pub scorers: Vec<ScorerResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRun {
    pub project_name: String,
    pub eval_run_name: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub results: Vec<ExampleResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounts {
    pub pass: usize,
    pub fail: usize,
    pub error: usize,
}

impl EvaluationRun {
    pub fn counts(&self) -> RunCounts {
        let mut counts = RunCounts::default();
        for r in self.results.iter().flat_map(|e| e.scorers.iter()) {
            if r.error.is_some() {
                counts.error += 1;
            } else if r.passed {
                counts.pass += 1;
            } else {
                counts.fail += 1;
            }
        }
        counts
    }

    pub fn all_passed(&self) -> bool {
        let c = self.counts();
        c.fail == 0 && c.error == 0
    }
}
