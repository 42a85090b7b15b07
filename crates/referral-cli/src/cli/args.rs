use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "referral",
    version,
    about = "Generate a referral-request email and grade it with an exact-match scorer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the generated email without evaluating it
    Generate(GenerateArgs),
    /// Generate the email and run it through the evaluation client
    Run(RunArgs),
    Version,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// JSON object with target_name, target_company, target_role, reason, your_name.
    /// Missing or non-string fields fall back to defaults.
    /// Default: the built-in Pooja → Ravi scenario
    #[arg(long)]
    pub user_info: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// YAML file with evaluation settings (version: 1)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference email to compare against.
    /// Default: the generated email itself (always scores 1.0)
    #[arg(long)]
    pub ideal: Option<PathBuf>,

    /// Score locally and skip uploading results
    #[arg(long)]
    pub offline: bool,

    /// Project the run is filed under
    #[arg(long)]
    pub project_name: Option<String>,

    /// Name of the evaluation run
    #[arg(long)]
    pub eval_run_name: Option<String>,

    /// Model identifier recorded with the run
    #[arg(long)]
    pub model: Option<String>,

    /// Write the evaluation run as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}
