use super::{print_json, read_text};
use crate::cli::AnalyzeArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use ligsketch::core::io::format::StructureFormat;
use ligsketch::core::models::atom::StructureRole;
use ligsketch::core::models::molecule::Molecule;
use ligsketch::workflows;
use std::path::Path;
use tracing::{info, warn};

/// Reads the ligand structure file. An unreadable file is only fatal without a formula to
/// synthesize from.
fn read_ligand(path: Option<&Path>, formula: Option<&str>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    match read_text(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if formula.is_some() => {
            warn!("{}; synthesizing the ligand from its formula instead.", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn load_receptor(path: &Path) -> Result<Molecule> {
    let text = read_text(path)?;
    let format = StructureFormat::detect(&text);
    info!("Loading receptor structure from {:?} as {}", path, format);
    format
        .parse(&text, StructureRole::Receptor)
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
}

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let ligand_text = read_ligand(args.ligand.as_deref(), args.formula.as_deref())?;
    let ligand = workflows::resolve_ligand(
        ligand_text.as_deref(),
        args.formula.as_deref(),
        &config.modeling.relaxation,
    )?;
    let receptor = load_receptor(&args.receptor_structure)?;

    let records = workflows::analyze::run(&ligand, &receptor, &config.modeling.analysis);
    print_json(&records)
}
