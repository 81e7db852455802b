//! Receptor catalogue: each known receptor carries a fixed coefficient set and binding site.

use crate::core::chem::sequence::{clean_sequence, residue_code};
use crate::core::utils::rng::{SeededRng, stable_hash};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Affinity cut-offs (kcal/mol) separating the binding-mode labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeThresholds {
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingMode {
    #[serde(rename = "Strong Inhibitor")]
    StrongInhibitor,
    #[serde(rename = "Moderate Binder")]
    ModerateBinder,
    #[serde(rename = "Weak Binder")]
    WeakBinder,
    #[serde(rename = "Poor Affinity")]
    PoorAffinity,
}

impl BindingMode {
    pub fn from_affinity(affinity: f64, thresholds: &ModeThresholds) -> Self {
        if affinity < thresholds.strong {
            Self::StrongInhibitor
        } else if affinity < thresholds.moderate {
            Self::ModerateBinder
        } else if affinity < thresholds.weak {
            Self::WeakBinder
        } else {
            Self::PoorAffinity
        }
    }
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StrongInhibitor => "Strong Inhibitor",
            Self::ModerateBinder => "Moderate Binder",
            Self::WeakBinder => "Weak Binder",
            Self::PoorAffinity => "Poor Affinity",
        })
    }
}

/// Coefficients of one receptor's linear affinity model.
///
/// Negative terms favour binding. Window bonuses apply when the descriptor lies inside the
/// inclusive range; count terms are multiplied by the count, capped.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityModel {
    pub base: f64,
    pub weight_window: (f64, f64),
    pub weight_bonus: f64,
    pub log_p_window: (f64, f64),
    pub log_p_bonus: f64,
    pub donor_term: f64,
    pub donor_cap: u32,
    pub acceptor_term: f64,
    pub acceptor_cap: u32,
    pub aromatic_term: f64,
    pub aromatic_cap: u32,
    pub tpsa_limit: f64,
    pub tpsa_penalty: f64,
    pub rotatable_limit: u32,
    pub rotatable_penalty: f64,
    /// Added to the seed before drawing the perturbation.
    pub noise_offset: u32,
    pub noise_amplitude: f64,
    pub thresholds: ModeThresholds,
}

static IL6_MODEL: AffinityModel = AffinityModel {
    base: -4.2,
    weight_window: (250.0, 500.0),
    weight_bonus: -1.5,
    log_p_window: (1.0, 4.0),
    log_p_bonus: -1.0,
    donor_term: -0.3,
    donor_cap: 3,
    acceptor_term: -0.2,
    acceptor_cap: 6,
    aromatic_term: -0.6,
    aromatic_cap: 3,
    tpsa_limit: 120.0,
    tpsa_penalty: 1.2,
    rotatable_limit: 8,
    rotatable_penalty: 0.25,
    noise_offset: 17,
    noise_amplitude: 1.0,
    thresholds: ModeThresholds {
        strong: -8.0,
        moderate: -6.0,
        weak: -4.0,
    },
};

static TNF_ALPHA_MODEL: AffinityModel = AffinityModel {
    base: -4.5,
    weight_window: (300.0, 550.0),
    weight_bonus: -1.2,
    log_p_window: (2.0, 5.0),
    log_p_bonus: -1.3,
    donor_term: -0.2,
    donor_cap: 2,
    acceptor_term: -0.25,
    acceptor_cap: 5,
    aromatic_term: -0.8,
    aromatic_cap: 3,
    tpsa_limit: 100.0,
    tpsa_penalty: 1.5,
    rotatable_limit: 7,
    rotatable_penalty: 0.3,
    noise_offset: 29,
    noise_amplitude: 1.2,
    thresholds: ModeThresholds {
        strong: -8.5,
        moderate: -6.5,
        weak: -4.5,
    },
};

static IL1_BETA_MODEL: AffinityModel = AffinityModel {
    base: -3.8,
    weight_window: (200.0, 450.0),
    weight_bonus: -1.0,
    log_p_window: (0.5, 3.5),
    log_p_bonus: -0.8,
    donor_term: -0.4,
    donor_cap: 4,
    acceptor_term: -0.3,
    acceptor_cap: 6,
    aromatic_term: -0.5,
    aromatic_cap: 2,
    tpsa_limit: 140.0,
    tpsa_penalty: 1.0,
    rotatable_limit: 10,
    rotatable_penalty: 0.2,
    noise_offset: 41,
    noise_amplitude: 0.8,
    thresholds: ModeThresholds {
        strong: -7.5,
        moderate: -5.5,
        weak: -3.5,
    },
};

static COX2_MODEL: AffinityModel = AffinityModel {
    base: -5.0,
    weight_window: (250.0, 400.0),
    weight_bonus: -1.6,
    log_p_window: (2.0, 4.5),
    log_p_bonus: -1.4,
    donor_term: -0.15,
    donor_cap: 2,
    acceptor_term: -0.2,
    acceptor_cap: 5,
    aromatic_term: -0.9,
    aromatic_cap: 3,
    tpsa_limit: 90.0,
    tpsa_penalty: 1.3,
    rotatable_limit: 6,
    rotatable_penalty: 0.35,
    noise_offset: 53,
    noise_amplitude: 1.0,
    thresholds: ModeThresholds {
        strong: -9.0,
        moderate: -7.0,
        weak: -5.0,
    },
};

pub static GENERIC_MODEL: AffinityModel = AffinityModel {
    base: -3.5,
    weight_window: (150.0, 500.0),
    weight_bonus: -1.0,
    log_p_window: (0.0, 5.0),
    log_p_bonus: -0.8,
    donor_term: -0.2,
    donor_cap: 3,
    acceptor_term: -0.2,
    acceptor_cap: 5,
    aromatic_term: -0.5,
    aromatic_cap: 3,
    tpsa_limit: 140.0,
    tpsa_penalty: 1.0,
    rotatable_limit: 10,
    rotatable_penalty: 0.2,
    noise_offset: 7,
    noise_amplitude: 1.5,
    thresholds: ModeThresholds {
        strong: -8.0,
        moderate: -6.0,
        weak: -4.0,
    },
};

/// A binding-site residue: three-letter name and sequence number.
pub type SiteResidue = (&'static str, i32);

const IL6_SITE: &[SiteResidue] = &[
    ("ARG", 179), ("GLN", 175), ("PHE", 74), ("LEU", 178), ("GLU", 172), ("LYS", 171),
];
const TNF_ALPHA_SITE: &[SiteResidue] = &[
    ("TYR", 59), ("TYR", 119), ("GLN", 61), ("LEU", 120), ("GLY", 121), ("SER", 60),
];
const IL1_BETA_SITE: &[SiteResidue] = &[
    ("ARG", 11), ("GLN", 15), ("PHE", 46), ("LYS", 93), ("MET", 44), ("ASP", 145),
];
const COX2_SITE: &[SiteResidue] = &[
    ("ARG", 120), ("TYR", 355), ("SER", 530), ("VAL", 523), ("PHE", 518), ("TRP", 387),
];
pub const DEFAULT_SITE: &[SiteResidue] = &[
    ("SER", 45), ("TYR", 88), ("ASP", 102), ("LYS", 131), ("LEU", 156), ("PHE", 190),
];

/// Number of residues drawn from a custom sequence.
const CUSTOM_SITE_SIZE: usize = 6;

/// Key used when no receptor is named at all.
pub const GENERIC_KEY: &str = "generic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceptorKind {
    Il6,
    TnfAlpha,
    Il1Beta,
    Cox2,
}

impl ReceptorKind {
    pub const ALL: [ReceptorKind; 4] = [Self::Il6, Self::TnfAlpha, Self::Il1Beta, Self::Cox2];

    /// Canonical key; also the text hashed into the scoring seed.
    pub fn key(self) -> &'static str {
        match self {
            Self::Il6 => "il-6",
            Self::TnfAlpha => "tnf-alpha",
            Self::Il1Beta => "il-1beta",
            Self::Cox2 => "cox-2",
        }
    }

    pub fn model(self) -> &'static AffinityModel {
        match self {
            Self::Il6 => &IL6_MODEL,
            Self::TnfAlpha => &TNF_ALPHA_MODEL,
            Self::Il1Beta => &IL1_BETA_MODEL,
            Self::Cox2 => &COX2_MODEL,
        }
    }

    pub fn binding_site(self) -> &'static [SiteResidue] {
        match self {
            Self::Il6 => IL6_SITE,
            Self::TnfAlpha => TNF_ALPHA_SITE,
            Self::Il1Beta => IL1_BETA_SITE,
            Self::Cox2 => COX2_SITE,
        }
    }
}

impl FromStr for ReceptorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "il-6" | "il6" | "interleukin-6" => Ok(Self::Il6),
            "tnf-alpha" | "tnf-a" | "tnfa" | "tnf" => Ok(Self::TnfAlpha),
            "il-1beta" | "il-1b" | "il1b" | "il1beta" | "interleukin-1beta" => Ok(Self::Il1Beta),
            "cox-2" | "cox2" | "ptgs2" => Ok(Self::Cox2),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReceptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The receptor a ligand is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceptorTarget {
    Known(ReceptorKind),
    /// An unrecognized (or absent) key, scored with the generic model.
    Generic { key: String },
    /// A user-supplied sequence, scored with the generic model and a sequence-derived site.
    Custom { sequence: String },
}

impl ReceptorTarget {
    /// Resolves caller input. A recognized key wins; otherwise a non-empty sequence selects
    /// custom handling; otherwise the generic model is used under the given key.
    pub fn resolve(key: Option<&str>, sequence: Option<&str>) -> Self {
        if let Some(kind) = key.and_then(|k| k.parse::<ReceptorKind>().ok()) {
            return Self::Known(kind);
        }
        let cleaned = sequence.map(clean_sequence).unwrap_or_default();
        if !cleaned.is_empty() {
            return Self::Custom { sequence: cleaned };
        }
        let key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(GENERIC_KEY);
        Self::Generic {
            key: key.to_string(),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Text hashed together with the ligand formula to seed scoring.
    pub fn seed_key(&self) -> &str {
        match self {
            Self::Known(kind) => kind.key(),
            Self::Generic { key } => key,
            Self::Custom { sequence } => sequence,
        }
    }

    pub fn model(&self) -> &'static AffinityModel {
        match self {
            Self::Known(kind) => kind.model(),
            Self::Generic { .. } | Self::Custom { .. } => &GENERIC_MODEL,
        }
    }

    /// Residues interactions are attributed to.
    pub fn binding_site(&self) -> Vec<(String, i32)> {
        match self {
            Self::Known(kind) => to_owned_site(kind.binding_site()),
            Self::Generic { .. } => to_owned_site(DEFAULT_SITE),
            Self::Custom { sequence } => sequence_site(sequence),
        }
    }
}

impl fmt::Display for ReceptorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => write!(f, "{kind}"),
            Self::Generic { key } => write!(f, "{key} (generic model)"),
            Self::Custom { sequence } => write!(f, "custom sequence ({} residues)", sequence.len()),
        }
    }
}

fn to_owned_site(site: &[SiteResidue]) -> Vec<(String, i32)> {
    site.iter().map(|&(name, number)| (name.to_string(), number)).collect()
}

/// Picks residues from a cleaned sequence with a generator seeded by the sequence hash.
fn sequence_site(sequence: &str) -> Vec<(String, i32)> {
    let residues: Vec<char> = sequence.chars().collect();
    if residues.is_empty() {
        return to_owned_site(DEFAULT_SITE);
    }
    let mut rng = SeededRng::new(stable_hash(sequence));
    (0..CUSTOM_SITE_SIZE)
        .map(|_| {
            let position = rng.next_index(residues.len());
            (residue_code(residues[position]).to_string(), position as i32 + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receptor_keys_parse_with_aliases() {
        assert_eq!("IL-6".parse(), Ok(ReceptorKind::Il6));
        assert_eq!("tnf".parse(), Ok(ReceptorKind::TnfAlpha));
        assert_eq!(" il1b ".parse(), Ok(ReceptorKind::Il1Beta));
        assert_eq!("PTGS2".parse(), Ok(ReceptorKind::Cox2));
        assert!("egfr".parse::<ReceptorKind>().is_err());
    }

    #[test]
    fn canonical_keys_round_trip() {
        for kind in ReceptorKind::ALL {
            assert_eq!(kind.key().parse(), Ok(kind));
        }
    }

    #[test]
    fn every_model_orders_its_thresholds() {
        for model in ReceptorKind::ALL.iter().map(|k| k.model()).chain([&GENERIC_MODEL]) {
            let t = model.thresholds;
            assert!(t.strong < t.moderate && t.moderate < t.weak);
        }
    }

    #[test]
    fn binding_mode_follows_threshold_ladder() {
        let t = GENERIC_MODEL.thresholds;
        assert_eq!(BindingMode::from_affinity(-9.0, &t), BindingMode::StrongInhibitor);
        assert_eq!(BindingMode::from_affinity(-7.0, &t), BindingMode::ModerateBinder);
        assert_eq!(BindingMode::from_affinity(-5.0, &t), BindingMode::WeakBinder);
        assert_eq!(BindingMode::from_affinity(-4.0, &t), BindingMode::PoorAffinity);
        assert_eq!(BindingMode::from_affinity(-2.0, &t), BindingMode::PoorAffinity);
    }

    #[test]
    fn binding_mode_serializes_as_label() {
        let json = serde_json::to_string(&BindingMode::ModerateBinder).unwrap();
        assert_eq!(json, "\"Moderate Binder\"");
        assert_eq!(BindingMode::StrongInhibitor.to_string(), "Strong Inhibitor");
    }

    #[test]
    fn known_key_wins_over_sequence() {
        let target = ReceptorTarget::resolve(Some("il-6"), Some("MKTAYIAK"));
        assert_eq!(target, ReceptorTarget::Known(ReceptorKind::Il6));
        assert!(target.is_known());
        assert_eq!(target.seed_key(), "il-6");
    }

    #[test]
    fn sequence_selects_custom_target_when_key_is_unknown() {
        let target = ReceptorTarget::resolve(None, Some(">my protein\nmkta yiak\n"));
        assert_eq!(
            target,
            ReceptorTarget::Custom {
                sequence: "MKTAYIAK".to_string()
            }
        );
        assert_eq!(target.model(), &GENERIC_MODEL);
    }

    #[test]
    fn unknown_key_without_sequence_is_generic() {
        let target = ReceptorTarget::resolve(Some("egfr"), Some(">header only"));
        assert_eq!(
            target,
            ReceptorTarget::Generic {
                key: "egfr".to_string()
            }
        );
        assert_eq!(target.binding_site().len(), DEFAULT_SITE.len());
    }

    #[test]
    fn absent_key_uses_generic_key() {
        let target = ReceptorTarget::resolve(None, None);
        assert_eq!(target.seed_key(), GENERIC_KEY);
    }

    #[test]
    fn custom_site_is_drawn_from_the_sequence() {
        let sequence = "MKTAYIAKQRQISFVKSHFSRQ";
        let site = ReceptorTarget::Custom {
            sequence: sequence.to_string(),
        }
        .binding_site();
        assert_eq!(site.len(), CUSTOM_SITE_SIZE);
        for (name, number) in &site {
            let one_letter = sequence.chars().nth(*number as usize - 1).unwrap();
            assert_eq!(name, residue_code(one_letter));
        }
    }

    #[test]
    fn custom_site_is_deterministic() {
        let a = sequence_site("MNSFSTSAFGPVAFSLGLLL");
        let b = sequence_site("MNSFSTSAFGPVAFSLGLLL");
        assert_eq!(a, b);
    }
}
