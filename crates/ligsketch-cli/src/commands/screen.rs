use super::resolve_target;
use crate::cli::ScreenArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ligsketch::engine::progress::ProgressReporter;
use ligsketch::workflows::{
    self,
    screen::{ScreenEntry, ScreenHit},
};
use std::path::Path;
use tracing::{info, warn};

fn read_entries(path: &Path) -> Result<Vec<ScreenEntry>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<ScreenEntry>, csv::Error>>()
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
}

fn write_hits(path: &Path, hits: &[ScreenHit]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for hit in hits {
        writer.serialize(hit)?;
    }
    writer.flush()?;
    Ok(())
}

pub async fn run(args: ScreenArgs, config: &AppConfig) -> Result<()> {
    let entries = read_entries(&args.input)?;
    info!("Loaded {} entries from {:?}", entries.len(), &args.input);
    if entries.is_empty() {
        warn!("Input library is empty; writing an empty result file.");
    }

    let target = resolve_target(&args.receptor, config)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let hits =
        tokio::task::block_in_place(|| workflows::screen::run(&entries, &target, &reporter));

    write_hits(&args.output, &hits)?;
    if let Some(best) = hits.first() {
        eprintln!(
            "✓ Best hit: {} ({:.2} kcal/mol, {})",
            best.name, best.affinity, best.binding_mode
        );
    }
    eprintln!("✓ {} hit(s) written to: {}", hits.len(), args.output.display());
    Ok(())
}
