use crate::core::chem::descriptors::MolecularDescriptors;
use crate::core::io::format::StructureFormat;
use crate::engine::affinity::models::ReceptorTarget;
use crate::engine::affinity::scorer::{AffinityResult, score};
use crate::engine::config::ModelingConfig;
use crate::engine::error::EngineError;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything the modeling pipeline produces for one ligand and receptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub formula: String,
    pub receptor: String,
    pub pdb: String,
    pub pdbqt: String,
    pub descriptors: MolecularDescriptors,
    pub affinity: AffinityResult,
}

#[instrument(skip_all, name = "profile_workflow", fields(formula = formula))]
pub fn run(
    formula: &str,
    target: &ReceptorTarget,
    config: &ModelingConfig,
) -> Result<Profile, EngineError> {
    let molecule = super::synthesize::run(formula, &config.relaxation);
    let descriptors = MolecularDescriptors::from_formula(formula);
    let affinity = score(formula, &descriptors, target);

    let profile = Profile {
        formula: formula.to_string(),
        receptor: target.seed_key().to_string(),
        pdb: StructureFormat::Pdb.render(&molecule)?,
        pdbqt: StructureFormat::Pdbqt.render(&molecule)?,
        descriptors,
        affinity,
    };

    info!(
        affinity = profile.affinity.affinity,
        confidence = profile.affinity.confidence,
        "Profile complete."
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::affinity::models::ReceptorKind;

    #[test]
    fn ethanol_profile_has_three_atoms_two_bonds_and_end() {
        let target = ReceptorTarget::Known(ReceptorKind::Il6);
        let profile = run("CCO", &target, &ModelingConfig::default()).unwrap();
        let lines: Vec<&str> = profile.pdb.lines().collect();
        assert_eq!(lines.iter().filter(|l| l.starts_with("HETATM")).count(), 3);
        assert_eq!(lines.iter().filter(|l| l.starts_with("CONECT")).count(), 2);
        assert_eq!(lines.last(), Some(&"END"));
        assert_eq!(lines.len(), 6);
        assert!((profile.descriptors.molecular_weight - 40.02).abs() < 1e-9);
        assert_eq!(profile.receptor, "il-6");
    }

    #[test]
    fn extended_text_reports_rotatable_bonds() {
        let target = ReceptorTarget::resolve(None, None);
        let profile = run("C-C-O", &target, &ModelingConfig::default()).unwrap();
        assert!(profile.pdbqt.contains("TORSDOF 2\n"));
    }

    #[test]
    fn empty_formula_still_profiles() {
        let target = ReceptorTarget::resolve(None, None);
        let profile = run("", &target, &ModelingConfig::default()).unwrap();
        assert_eq!(profile.pdb, "END\n");
        assert_eq!(profile.descriptors, MolecularDescriptors::default());
    }

    #[test]
    fn profile_serializes_nested_records() {
        let target = ReceptorTarget::Known(ReceptorKind::Cox2);
        let profile = run("CC(=O)Oc1ccccc1C(=O)O", &target, &ModelingConfig::default()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["descriptors"]["molecularWeight"].is_number());
        assert!(json["affinity"]["bindingMode"].is_string());
    }

    #[test]
    fn large_ligands_profile_without_overflowing_names() {
        let target = ReceptorTarget::resolve(None, None);
        let config = ModelingConfig::default();

        let chlorinated = run(&"CCl".repeat(50), &target, &config).unwrap();
        let records: Vec<&str> = chlorinated
            .pdb
            .lines()
            .filter(|l| l.starts_with("HETATM"))
            .collect();
        assert_eq!(records.len(), 100);
        assert_eq!(records[99][12..16].trim_end(), "Cl");
        assert!(chlorinated.pdbqt.contains("TORSDOF"));

        let chain = run(&"C".repeat(1000), &target, &config).unwrap();
        assert_eq!(
            chain.pdb.lines().filter(|l| l.starts_with("HETATM")).count(),
            1000
        );
    }
}
