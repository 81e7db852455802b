//! Interactions attached to an affinity result.
//!
//! These are derived from formula pattern counts and attributed to the receptor's binding-site
//! residues with the scoring seed. No coordinates are involved; see `engine::interactions` for
//! the geometric analyzer.

use crate::core::chem::descriptors::MolecularDescriptors;
use crate::core::chem::elements::is_halogen;
use crate::core::chem::formula::{count_element, count_pattern, tokenize};
use crate::core::utils::rng::{Seed, SeededRng};
use crate::engine::interactions::{InteractionRecord, InteractionType, rank};

const MAX_HBONDS: usize = 3;
const MAX_SALT_BRIDGES: usize = 2;
const MAX_PI_STACKS: usize = 2;
const MAX_HYDROPHOBIC: usize = 3;
const MAX_HALOGEN_BONDS: usize = 2;
const CARBONS_PER_HYDROPHOBIC_CONTACT: usize = 4;
const ELECTROSTATIC_TPSA_THRESHOLD: f64 = 60.0;

/// Label used when the formula has no element tokens to attribute a contact to.
const FALLBACK_LIGAND_LABEL: &str = "LIG";

/// Distance window `(low, span)` in Å for each generated category.
fn distance_window(kind: InteractionType) -> (f64, f64) {
    match kind {
        InteractionType::HydrogenBond => (2.6, 0.7),
        InteractionType::SaltBridge => (2.8, 1.0),
        InteractionType::PiStacking => (3.4, 0.6),
        InteractionType::Hydrophobic => (3.5, 0.5),
        InteractionType::HalogenBond => (2.9, 0.5),
        InteractionType::Electrostatic => (3.5, 1.0),
        InteractionType::VanDerWaals => (3.8, 0.7),
    }
}

struct ContactSource<'a> {
    tokens: &'a [String],
    site: &'a [(String, i32)],
    rng: SeededRng,
}

impl ContactSource<'_> {
    fn ligand_label(&mut self, accepts: impl Fn(&str) -> bool) -> String {
        let candidates: Vec<usize> = (0..self.tokens.len())
            .filter(|&i| accepts(self.tokens[i].as_str()))
            .collect();
        let pool: Vec<usize> = if candidates.is_empty() {
            (0..self.tokens.len()).collect()
        } else {
            candidates
        };
        if pool.is_empty() {
            return FALLBACK_LIGAND_LABEL.to_string();
        }
        let i = pool[self.rng.next_index(pool.len())];
        format!("{}{}", self.tokens[i], i + 1)
    }

    fn residue_label(&mut self) -> String {
        let (name, number) = &self.site[self.rng.next_index(self.site.len())];
        format!("{name}{number}")
    }

    fn push(
        &mut self,
        out: &mut Vec<InteractionRecord>,
        kind: InteractionType,
        count: usize,
        accepts: impl Fn(&str) -> bool + Copy,
    ) {
        let (low, span) = distance_window(kind);
        for _ in 0..count {
            let residue = self.residue_label();
            let ligand = self.ligand_label(accepts);
            let distance = self.rng.next_in(low, span);
            let angle = (kind == InteractionType::HydrogenBond).then(|| self.rng.next_in(150.0, 30.0));
            out.push(InteractionRecord::new(kind, ligand, residue, distance, angle));
        }
    }
}

/// Generates ranked interactions for `formula` against the given binding site.
///
/// An empty `site` yields no interactions.
pub fn formula_contacts(
    formula: &str,
    descriptors: &MolecularDescriptors,
    site: &[(String, i32)],
    seed: Seed,
    limit: usize,
) -> Vec<InteractionRecord> {
    if site.is_empty() {
        return Vec::new();
    }
    let tokens = tokenize(formula);
    let mut source = ContactSource {
        tokens: &tokens,
        site,
        rng: SeededRng::new(seed),
    };

    let hbonds = ((descriptors.h_bond_donors + descriptors.h_bond_acceptors) as usize).min(MAX_HBONDS);
    let charges = (count_pattern(formula, "+") + count_pattern(formula, "-]")).min(MAX_SALT_BRIDGES);
    let stacks = (descriptors.aromatic_rings as usize).min(MAX_PI_STACKS);
    let hydrophobic =
        (count_element(&tokens, "C") / CARBONS_PER_HYDROPHOBIC_CONTACT).min(MAX_HYDROPHOBIC);
    let halogens = tokens.iter().filter(|t| is_halogen(t)).count().min(MAX_HALOGEN_BONDS);
    let electrostatic = usize::from(descriptors.tpsa > ELECTROSTATIC_TPSA_THRESHOLD);
    let vdw = usize::from(!tokens.is_empty());

    let mut records = Vec::new();
    source.push(&mut records, InteractionType::HydrogenBond, hbonds, |e| matches!(e, "O" | "N"));
    source.push(&mut records, InteractionType::SaltBridge, charges, |e| matches!(e, "O" | "N"));
    source.push(&mut records, InteractionType::PiStacking, stacks, |e| e == "C");
    source.push(&mut records, InteractionType::Hydrophobic, hydrophobic, |e| e == "C");
    source.push(&mut records, InteractionType::HalogenBond, halogens, is_halogen);
    source.push(&mut records, InteractionType::Electrostatic, electrostatic, |e| matches!(e, "O" | "N"));
    source.push(&mut records, InteractionType::VanDerWaals, vdw, |_| true);

    rank(records, limit)
}
