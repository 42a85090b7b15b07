pub mod generate;
pub mod run;

use super::args::{Cli, Command, InputArgs};
use crate::exit_codes;
use anyhow::Context;
use referral_core::model::UserInfo;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Run(args) => run::cmd_run(args).await,
        Command::Version => {
            println!("referral {}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// The scenario from `--user-info`, or the built-in one.
pub(crate) fn load_user_info(input: &InputArgs) -> anyhow::Result<UserInfo> {
    let Some(path) = &input.user_info else {
        return Ok(UserInfo::canned_scenario());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read user info {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse user info {} as JSON", path.display()))?;
    Ok(UserInfo::from_value(&value))
}
