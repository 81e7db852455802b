//! Geometric contact classification between a ligand and a receptor.

use super::config::AnalysisConfig;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry::round_to;
use itertools::iproduct;
use serde::Serialize;
use std::fmt;
use tracing::debug;

const HBOND_MAX_DISTANCE: f64 = 3.5;
const HYDROPHOBIC_MAX_DISTANCE: f64 = 4.0;
const SALT_BRIDGE_MAX_DISTANCE: f64 = 4.0;
const VDW_MAX_DISTANCE: f64 = 4.5;

/// Length scale of the exponential strength decay, in Angstroms.
const STRENGTH_DECAY_LENGTH: f64 = 2.0;

const AROMATIC_RESIDUES: [&str; 3] = ["PHE", "TYR", "TRP"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    HydrogenBond,
    Hydrophobic,
    PiStacking,
    SaltBridge,
    VanDerWaals,
    Electrostatic,
    HalogenBond,
}

impl InteractionType {
    /// Strength of this interaction at zero distance.
    pub fn max_strength(self) -> f64 {
        match self {
            Self::HydrogenBond => 1.0,
            Self::SaltBridge => 0.9,
            Self::PiStacking => 0.8,
            Self::HalogenBond => 0.7,
            Self::Hydrophobic => 0.6,
            Self::Electrostatic => 0.5,
            Self::VanDerWaals => 0.3,
        }
    }

    /// `max_strength * exp(-distance / 2)`.
    pub fn strength_at(self, distance: f64) -> f64 {
        self.max_strength() * (-distance / STRENGTH_DECAY_LENGTH).exp()
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::HydrogenBond => "hydrogen_bond",
            Self::Hydrophobic => "hydrophobic",
            Self::PiStacking => "pi_stacking",
            Self::SaltBridge => "salt_bridge",
            Self::VanDerWaals => "van_der_waals",
            Self::Electrostatic => "electrostatic",
            Self::HalogenBond => "halogen_bond",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub ligand_atom_label: String,
    pub protein_residue_label: String,
    /// Å, rounded to 2 decimals.
    pub distance: f64,
    /// Degrees, when an angle is meaningful for the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// In `[0, 1]`, rounded to 3 decimals.
    pub strength: f64,
}

impl InteractionRecord {
    pub fn new(
        kind: InteractionType,
        ligand_atom_label: String,
        protein_residue_label: String,
        distance: f64,
        angle: Option<f64>,
    ) -> Self {
        Self {
            kind,
            ligand_atom_label,
            protein_residue_label,
            distance: round_to(distance, 2),
            angle: angle.map(|a| round_to(a, 1)),
            strength: round_to(kind.strength_at(distance), 3),
        }
    }
}

/// Sorts by strength, strongest first, and keeps the top `limit`. Ties keep their order.
pub fn rank(mut records: Vec<InteractionRecord>, limit: usize) -> Vec<InteractionRecord> {
    records.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    records.truncate(limit);
    records
}

fn is_polar(atom: &Atom) -> bool {
    matches!(atom.element.as_str(), "O" | "N")
}

fn residue_is(atom: &Atom, name: &str) -> bool {
    atom.residue
        .as_deref()
        .is_some_and(|r| r.eq_ignore_ascii_case(name))
}

/// Applies the ordered rule cascade to one ligand/receptor atom pair. First match wins.
pub fn classify(ligand: &Atom, receptor: &Atom, distance: f64) -> Option<InteractionType> {
    if is_polar(ligand) && is_polar(receptor) && distance < HBOND_MAX_DISTANCE {
        return Some(InteractionType::HydrogenBond);
    }
    if ligand.element == "C" && receptor.element == "C" && distance < HYDROPHOBIC_MAX_DISTANCE {
        return Some(InteractionType::Hydrophobic);
    }
    let ligand_residue = ligand.residue_label().to_ascii_uppercase();
    if AROMATIC_RESIDUES.iter().any(|r| ligand_residue.contains(r)) {
        return Some(InteractionType::PiStacking);
    }
    let charged_pair = (ligand.element == "N" && residue_is(receptor, "ASP"))
        || (ligand.element == "O" && residue_is(receptor, "LYS"));
    if charged_pair && distance < SALT_BRIDGE_MAX_DISTANCE {
        return Some(InteractionType::SaltBridge);
    }
    if distance < VDW_MAX_DISTANCE {
        return Some(InteractionType::VanDerWaals);
    }
    None
}

/// Enumerates every ligand/receptor atom pair within the contact cutoff, classifies it and
/// returns the strongest interactions.
///
/// This is O(n·m) in the two atom counts, which is fine at small-molecule scale.
pub fn analyze(ligand: &Molecule, receptor: &Molecule, config: &AnalysisConfig) -> Vec<InteractionRecord> {
    let records: Vec<InteractionRecord> = iproduct!(ligand.atoms(), receptor.atoms())
        .filter_map(|(l, r)| {
            let distance = l.distance_to(r);
            if distance > config.contact_cutoff {
                return None;
            }
            classify(l, r, distance).map(|kind| {
                InteractionRecord::new(kind, l.label(), r.residue_label(), distance, None)
            })
        })
        .collect();

    debug!(
        "Classified {} contact(s) between {} ligand and {} receptor atoms.",
        records.len(),
        ligand.len(),
        receptor.len()
    );
    rank(records, config.max_interactions)
}
