use crate::core::models::molecule::Molecule;
use crate::engine::config::AnalysisConfig;
use crate::engine::interactions::{InteractionRecord, analyze};
use tracing::{info, instrument};

/// Classifies close contacts between a ligand and a receptor structure.
///
/// Returns the strongest `config.max_interactions` records, strongest first.
#[instrument(skip_all, name = "analyze_workflow")]
pub fn run(ligand: &Molecule, receptor: &Molecule, config: &AnalysisConfig) -> Vec<InteractionRecord> {
    info!(
        ligand_atoms = ligand.len(),
        receptor_atoms = receptor.len(),
        cutoff = config.contact_cutoff,
        "Analyzing ligand-receptor contacts."
    );
    let records = analyze(ligand, receptor, config);
    info!("Found {} interaction(s).", records.len());
    records
}
