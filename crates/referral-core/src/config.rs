//! Evaluation settings, built once at startup and passed to the driver.

use crate::errors::{ReferralError, ReferralResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Settings for one evaluation run.
///
/// | Variable | Description |
/// |----------|-------------|
/// | `JUDGMENT_API_KEY` | API key for the evaluation service |
/// | `JUDGMENT_ORG_ID` | Organization id sent with every request |
/// | `JUDGMENT_API_URL` | Service base URL (default: `https://api.judgmentlabs.ai`) |
/// | `JUDGMENT_PROJECT_NAME` | Project results are filed under (default: `referral-agent`) |
/// | `JUDGMENT_EVAL_RUN_NAME` | Run name (default: `initial-test`) |
/// | `JUDGMENT_MODEL` | Model identifier recorded with the run (default: `gpt-4`) |
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub org_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_eval_run_name")]
    pub eval_run_name: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Replace a previous run with the same name.
    #[serde(default = "default_true", rename = "override")]
    pub override_existing: bool,

    /// Append to a previous run with the same name.
    #[serde(default)]
    pub append: bool,

    #[serde(default)]
    pub async_execution: bool,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}

fn default_base_url() -> String {
    "https://api.judgmentlabs.ai".to_string()
}

fn default_project_name() -> String {
    "referral-agent".to_string()
}

fn default_eval_run_name() -> String {
    "initial-test".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            api_key: None,
            org_id: None,
            base_url: default_base_url(),
            project_name: default_project_name(),
            eval_run_name: default_eval_run_name(),
            model: default_model(),
            override_existing: true,
            append: false,
            async_execution: false,
            timeout_secs: default_timeout(),
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for EvalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalConfig")
            .field("version", &self.version)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("org_id", &self.org_id)
            .field("base_url", &self.base_url)
            .field("project_name", &self.project_name)
            .field("eval_run_name", &self.eval_run_name)
            .field("model", &self.model)
            .field("override_existing", &self.override_existing)
            .field("append", &self.append)
            .field("async_execution", &self.async_execution)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EvalConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Overlay any set, non-empty `JUDGMENT_*` variable onto `self`.
    pub fn apply_env(mut self) -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        if let Some(v) = var("JUDGMENT_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = var("JUDGMENT_ORG_ID") {
            self.org_id = Some(v);
        }
        if let Some(v) = var("JUDGMENT_API_URL") {
            self.base_url = v;
        }
        if let Some(v) = var("JUDGMENT_PROJECT_NAME") {
            self.project_name = v;
        }
        if let Some(v) = var("JUDGMENT_EVAL_RUN_NAME") {
            self.eval_run_name = v;
        }
        if let Some(v) = var("JUDGMENT_MODEL") {
            self.model = v;
        }
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_eval_run_name(mut self, name: impl Into<String>) -> Self {
        self.eval_run_name = name.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_async_execution(mut self, enabled: bool) -> Self {
        self.async_execution = enabled;
        self
    }
}

pub fn load_config(path: &Path) -> ReferralResult<EvalConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| ReferralError::Config {
        message: format!("failed to read config {}: {}", path.display(), e),
    })?;
    let cfg: EvalConfig = serde_yaml::from_str(&raw).map_err(|e| ReferralError::Config {
        message: format!("failed to parse YAML: {}", e),
    })?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ReferralError::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                cfg.version, SUPPORTED_CONFIG_VERSION
            ),
        });
    }
    Ok(cfg)
}
