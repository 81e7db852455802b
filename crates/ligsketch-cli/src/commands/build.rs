use crate::cli::BuildArgs;
use crate::config::AppConfig;
use crate::error::Result;
use ligsketch::core::io::format::StructureFormat;
use ligsketch::workflows;
use std::path::Path;
use tracing::info;

/// Flag first, then a recognizable output extension, then the configured default.
fn output_format(flag: Option<StructureFormat>, output: Option<&Path>, default: StructureFormat) -> StructureFormat {
    flag.or_else(|| output.and_then(StructureFormat::from_path))
        .unwrap_or(default)
}

pub async fn run(args: BuildArgs, config: &AppConfig) -> Result<()> {
    let format = output_format(args.format, args.output.as_deref(), config.default_format);

    let molecule = workflows::synthesize::run(&args.formula, &config.modeling.relaxation);
    let text = format.render(&molecule)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Wrote {} atom(s) as {} to {:?}", molecule.len(), format, path);
            eprintln!("✓ Structure written to: {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
