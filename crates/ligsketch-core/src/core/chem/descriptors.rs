//! Physicochemical descriptor estimates computed straight from formula text.
//!
//! These are textual heuristics, not cheminformatics: the affinity models are calibrated
//! against these exact formulas, so changing any coefficient changes every downstream score.

use super::elements::{atomic_mass, is_halogen};
use super::formula::{count_element, count_pattern, tokenize};
use crate::core::utils::geometry::round_to;
use serde::Serialize;

const LOGP_CARBON: f64 = 0.2;
const LOGP_OXYGEN: f64 = -0.5;
const LOGP_NITROGEN: f64 = -0.3;
const LOGP_SULFUR: f64 = 0.1;
const LOGP_HALOGEN: f64 = 0.4;

const TPSA_OXYGEN: f64 = 20.2;
const TPSA_NITROGEN: f64 = 11.7;

const AROMATIC_ATOMS_PER_RING: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularDescriptors {
    /// Sum of atomic masses in g/mol.
    pub molecular_weight: f64,
    pub log_p: f64,
    pub h_bond_donors: u32,
    pub h_bond_acceptors: u32,
    /// Topological polar surface area proxy in Å².
    pub tpsa: f64,
    pub rotatable_bonds: u32,
    pub aromatic_rings: u32,
    pub heteroatoms: u32,
}

impl MolecularDescriptors {
    /// Computes every descriptor for `formula`. Empty or unparseable input yields all zeros.
    pub fn from_formula(formula: &str) -> Self {
        let tokens = tokenize(formula);

        let molecular_weight: f64 = tokens.iter().map(|t| atomic_mass(t)).sum();

        let carbons = count_element(&tokens, "C") as f64;
        let oxygens = count_element(&tokens, "O") as f64;
        let nitrogens = count_element(&tokens, "N") as f64;
        let sulfurs = count_element(&tokens, "S") as f64;
        let halogens = tokens.iter().filter(|t| is_halogen(t)).count() as f64;
        let log_p = LOGP_CARBON * carbons
            + LOGP_OXYGEN * oxygens
            + LOGP_NITROGEN * nitrogens
            + LOGP_SULFUR * sulfurs
            + LOGP_HALOGEN * halogens;

        let donors = formula.chars().filter(|&c| c == 'O' || c == 'H').count()
            + count_pattern(formula, "NH");
        let acceptors = formula.chars().filter(|&c| c == 'N' || c == 'O').count();

        let tpsa = TPSA_OXYGEN * oxygens + TPSA_NITROGEN * nitrogens;

        let rotatable =
            count_pattern(formula, "-").saturating_sub(count_pattern(formula, "CH3"));

        let lowercase_carbons = formula.chars().filter(|&c| c == 'c').count() as f64;
        let aromatic_rings = round_to(lowercase_carbons / AROMATIC_ATOMS_PER_RING, 0);

        let heteroatoms = tokens
            .iter()
            .filter(|t| t.as_str() != "C" && t.as_str() != "H")
            .count();

        Self {
            molecular_weight: round_to(molecular_weight, 2),
            log_p: round_to(log_p, 2),
            h_bond_donors: donors as u32,
            h_bond_acceptors: acceptors as u32,
            tpsa: round_to(tpsa, 2),
            rotatable_bonds: rotatable as u32,
            aromatic_rings: aromatic_rings as u32,
            heteroatoms: heteroatoms as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethanol_descriptors_follow_the_heuristics() {
        let d = MolecularDescriptors::from_formula("CCO");
        assert!((d.molecular_weight - 40.02).abs() < 1e-9);
        assert!((d.log_p - (0.4 - 0.5)).abs() < 1e-9);
        assert_eq!(d.h_bond_donors, 1);
        assert_eq!(d.h_bond_acceptors, 1);
        assert!((d.tpsa - 20.2).abs() < 1e-9);
        assert_eq!(d.rotatable_bonds, 0);
        assert_eq!(d.aromatic_rings, 0);
        assert_eq!(d.heteroatoms, 1);
    }

    #[test]
    fn empty_formula_gives_all_zero_descriptors() {
        assert_eq!(MolecularDescriptors::from_formula(""), MolecularDescriptors::default());
    }

    #[test]
    fn nh_pairs_count_as_extra_donors() {
        // 'H' once as a character, plus one "NH" pair.
        let d = MolecularDescriptors::from_formula("CNH");
        assert_eq!(d.h_bond_donors, 2);
        assert_eq!(d.h_bond_acceptors, 1);
    }

    #[test]
    fn halogens_raise_log_p() {
        let plain = MolecularDescriptors::from_formula("CC");
        let chlorinated = MolecularDescriptors::from_formula("CCCl");
        assert!((chlorinated.log_p - plain.log_p - 0.4).abs() < 1e-9);
    }

    #[test]
    fn rotatable_bonds_subtract_methyl_groups_and_floor_at_zero() {
        assert_eq!(MolecularDescriptors::from_formula("C-C-C-O").rotatable_bonds, 3);
        assert_eq!(MolecularDescriptors::from_formula("CH3-CH2-CH3").rotatable_bonds, 0);
        assert_eq!(MolecularDescriptors::from_formula("CH3CH3-C").rotatable_bonds, 0);
    }

    #[test]
    fn aromatic_rings_round_lowercase_carbons_over_six() {
        assert_eq!(MolecularDescriptors::from_formula("c1ccccc1").aromatic_rings, 1);
        assert_eq!(MolecularDescriptors::from_formula("c1ccc1").aromatic_rings, 1);
        assert_eq!(MolecularDescriptors::from_formula("cc").aromatic_rings, 0);
        assert_eq!(
            MolecularDescriptors::from_formula("c1ccc2ccccc2c1").aromatic_rings,
            2
        );
    }

    #[test]
    fn heteroatoms_exclude_carbon_and_hydrogen() {
        let d = MolecularDescriptors::from_formula("CC(=O)NSClH");
        assert_eq!(d.heteroatoms, 4);
    }

    #[test]
    fn molecular_weight_grows_with_every_added_token() {
        let mut formula = String::from("C");
        let mut previous = MolecularDescriptors::from_formula(&formula).molecular_weight;
        for element in ["C", "O", "N", "H", "Cl", "S", "Xe"] {
            formula.push_str(element);
            let next = MolecularDescriptors::from_formula(&formula).molecular_weight;
            assert!(next > previous, "adding {element} did not increase weight");
            previous = next;
        }
    }

    #[test]
    fn descriptors_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(MolecularDescriptors::from_formula("CCO")).unwrap();
        assert!(json.get("molecularWeight").is_some());
        assert!(json.get("logP").is_some());
        assert!(json.get("hBondDonors").is_some());
    }
}
