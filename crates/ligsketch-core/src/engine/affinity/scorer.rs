use super::contacts::formula_contacts;
use super::models::{AffinityModel, BindingMode, ReceptorTarget};
use crate::core::chem::descriptors::MolecularDescriptors;
use crate::core::utils::geometry::round_to;
use crate::core::utils::rng::{Seed, combine_seeds, seeded_random, stable_hash};
use crate::engine::interactions::InteractionRecord;
use serde::Serialize;
use tracing::debug;

const MAX_ATTACHED_INTERACTIONS: usize = 10;

const CONFIDENCE_BASE: u8 = 55;
const CONFIDENCE_WEIGHT_BONUS: u8 = 10;
const CONFIDENCE_LOG_P_BONUS: u8 = 10;
const CONFIDENCE_POLARITY_BONUS: u8 = 5;
const CONFIDENCE_FLEXIBILITY_BONUS: u8 = 5;
const CONFIDENCE_KNOWN_RECEPTOR_BONUS: u8 = 15;
const CONFIDENCE_CEILING: u8 = 95;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffinityResult {
    /// kcal/mol, rounded to 2 decimals. More negative binds tighter.
    pub affinity: f64,
    /// Percentage in `[0, 95]`.
    pub confidence: u8,
    pub interactions: Vec<InteractionRecord>,
    pub binding_mode: BindingMode,
}

/// Seed shared by the affinity perturbation and the attached interactions.
pub fn scoring_seed(formula: &str, target: &ReceptorTarget) -> Seed {
    combine_seeds(stable_hash(formula), stable_hash(target.seed_key()))
}

fn in_window(value: f64, (low, high): (f64, f64)) -> bool {
    (low..=high).contains(&value)
}

impl AffinityModel {
    /// Evaluates the linear model for `descriptors`, perturbed deterministically by `seed`.
    pub fn estimate(&self, descriptors: &MolecularDescriptors, seed: Seed) -> f64 {
        let d = descriptors;
        let mut affinity = self.base;

        if in_window(d.molecular_weight, self.weight_window) {
            affinity += self.weight_bonus;
        }
        if in_window(d.log_p, self.log_p_window) {
            affinity += self.log_p_bonus;
        }
        affinity += self.donor_term * f64::from(d.h_bond_donors.min(self.donor_cap));
        affinity += self.acceptor_term * f64::from(d.h_bond_acceptors.min(self.acceptor_cap));
        affinity += self.aromatic_term * f64::from(d.aromatic_rings.min(self.aromatic_cap));
        if d.tpsa > self.tpsa_limit {
            affinity += self.tpsa_penalty;
        }
        affinity +=
            self.rotatable_penalty * f64::from(d.rotatable_bonds.saturating_sub(self.rotatable_limit));

        let noise = seeded_random(f64::from(seed) + f64::from(self.noise_offset)) - 0.5;
        affinity += noise * self.noise_amplitude;

        round_to(affinity, 2)
    }
}

/// Confidence depends on drug-likeness of the descriptors and on whether the receptor is known.
pub fn confidence(descriptors: &MolecularDescriptors, known_receptor: bool) -> u8 {
    let d = descriptors;
    let mut confidence = CONFIDENCE_BASE;
    if in_window(d.molecular_weight, (150.0, 500.0)) {
        confidence += CONFIDENCE_WEIGHT_BONUS;
    }
    if in_window(d.log_p, (-1.0, 5.0)) {
        confidence += CONFIDENCE_LOG_P_BONUS;
    }
    if d.h_bond_donors <= 5 && d.h_bond_acceptors <= 10 {
        confidence += CONFIDENCE_POLARITY_BONUS;
    }
    if d.rotatable_bonds <= 10 {
        confidence += CONFIDENCE_FLEXIBILITY_BONUS;
    }
    if known_receptor {
        confidence += CONFIDENCE_KNOWN_RECEPTOR_BONUS;
    }
    confidence.min(CONFIDENCE_CEILING)
}

/// Scores a ligand formula against a receptor target.
///
/// Pure and deterministic: equal inputs give bit-identical results.
pub fn score(
    formula: &str,
    descriptors: &MolecularDescriptors,
    target: &ReceptorTarget,
) -> AffinityResult {
    let seed = scoring_seed(formula, target);
    let model = target.model();
    let affinity = model.estimate(descriptors, seed);
    let binding_mode = BindingMode::from_affinity(affinity, &model.thresholds);
    let interactions = formula_contacts(
        formula,
        descriptors,
        &target.binding_site(),
        seed,
        MAX_ATTACHED_INTERACTIONS,
    );

    debug!(
        formula,
        target = %target,
        seed,
        affinity,
        mode = %binding_mode,
        "Scored ligand."
    );

    AffinityResult {
        affinity,
        confidence: confidence(descriptors, target.is_known()),
        interactions,
        binding_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::affinity::models::{GENERIC_MODEL, ReceptorKind};

    fn score_formula(formula: &str, target: &ReceptorTarget) -> AffinityResult {
        score(formula, &MolecularDescriptors::from_formula(formula), target)
    }

    #[test]
    fn repeated_scoring_is_identical() {
        let target = ReceptorTarget::resolve(Some("il-6"), None);
        let a = score_formula("CCO", &target);
        let b = score_formula("CCO", &target);
        assert_eq!(a, b);
        assert_eq!(a.affinity.to_bits(), b.affinity.to_bits());
    }

    #[test]
    fn seed_combines_formula_and_receptor_hashes() {
        let target = ReceptorTarget::Known(ReceptorKind::Il6);
        assert_eq!(
            scoring_seed("CCO", &target),
            stable_hash("CCO").wrapping_add(stable_hash("il-6"))
        );
    }

    #[test]
    fn ethanol_confidence_reflects_receptor_knowledge() {
        let d = MolecularDescriptors::from_formula("CCO");
        assert_eq!(confidence(&d, false), 75);
        assert_eq!(confidence(&d, true), 90);
    }

    #[test]
    fn confidence_is_capped() {
        let d = MolecularDescriptors {
            molecular_weight: 300.0,
            log_p: 2.0,
            h_bond_donors: 1,
            h_bond_acceptors: 2,
            rotatable_bonds: 3,
            ..Default::default()
        };
        assert_eq!(confidence(&d, true), CONFIDENCE_CEILING);
    }

    #[test]
    fn perturbation_is_bounded_by_amplitude() {
        // Only the base and the log P window apply to an empty formula.
        let d = MolecularDescriptors::default();
        let center = GENERIC_MODEL.base + GENERIC_MODEL.log_p_bonus;
        let half = GENERIC_MODEL.noise_amplitude / 2.0;
        for seed in [0, 1, 17, 99_999, u32::MAX] {
            let a = GENERIC_MODEL.estimate(&d, seed);
            assert!(a >= center - half - 0.005 && a <= center + half + 0.005, "{a}");
        }
    }

    #[test]
    fn penalties_make_affinity_less_favorable() {
        let lean = MolecularDescriptors {
            tpsa: 10.0,
            ..Default::default()
        };
        let polar_floppy = MolecularDescriptors {
            tpsa: 200.0,
            rotatable_bonds: 20,
            ..Default::default()
        };
        let model = ReceptorKind::Cox2.model();
        assert!(model.estimate(&polar_floppy, 5) > model.estimate(&lean, 5));
    }

    #[test]
    fn unknown_receptor_uses_generic_model_and_default_site() {
        let result = score_formula("CC(=O)Oc1ccccc1C(=O)O", &ReceptorTarget::resolve(Some("egfr"), None));
        let defaults = ["SER45", "TYR88", "ASP102", "LYS131", "LEU156", "PHE190"];
        assert!(!result.interactions.is_empty());
        for r in &result.interactions {
            assert!(defaults.contains(&r.protein_residue_label.as_str()));
        }
    }

    #[test]
    fn binding_mode_agrees_with_affinity() {
        for kind in ReceptorKind::ALL {
            let target = ReceptorTarget::Known(kind);
            let result = score_formula("CC(C)Cc1ccc(cc1)C(C)C(=O)O", &target);
            assert_eq!(
                result.binding_mode,
                BindingMode::from_affinity(result.affinity, &kind.model().thresholds)
            );
        }
    }

    #[test]
    fn result_serializes_with_camel_case_fields() {
        let result = score_formula("CCO", &ReceptorTarget::Known(ReceptorKind::TnfAlpha));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("bindingMode").is_some());
        assert!(json["interactions"].is_array());
        assert_eq!(json["confidence"], 90);
    }
}
