use super::{print_json, resolve_target};
use crate::cli::ScoreArgs;
use crate::config::AppConfig;
use crate::error::Result;
use ligsketch::workflows;

pub async fn run(args: ScoreArgs, config: &AppConfig) -> Result<()> {
    let target = resolve_target(&args.receptor, config)?;
    let profile = workflows::profile::run(&args.formula, &target, &config.modeling)?;
    print_json(&profile)
}
