use super::{print_json, resolve_target};
use crate::cli::ScoreArgs;
use crate::config::AppConfig;
use crate::error::Result;
use ligsketch::core::chem::descriptors::MolecularDescriptors;
use ligsketch::engine::affinity::score;
use tracing::info;

pub async fn run(args: ScoreArgs, config: &AppConfig) -> Result<()> {
    let target = resolve_target(&args.receptor, config)?;
    let descriptors = MolecularDescriptors::from_formula(&args.formula);
    let result = score(&args.formula, &descriptors, &target);
    info!(
        affinity = result.affinity,
        confidence = result.confidence,
        mode = %result.binding_mode,
        "Scoring finished."
    );
    print_json(&result)
}
