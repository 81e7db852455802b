use crate::core::models::atom::StructureRole;
use phf::{Map, Set, phf_map, phf_set};

/// Mass used for any element missing from [`ATOMIC_MASSES`].
pub const DEFAULT_ATOMIC_MASS: f64 = 12.011;

static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.008, "B" => 10.81, "C" => 12.011, "N" => 14.007, "O" => 15.999,
    "F" => 18.998, "Na" => 22.990, "Mg" => 24.305, "Si" => 28.085, "P" => 30.974,
    "S" => 32.06, "Cl" => 35.45, "K" => 39.098, "Ca" => 40.078, "Fe" => 55.845,
    "Zn" => 65.38, "Se" => 78.971, "Br" => 79.904, "I" => 126.904,
};

static HALOGENS: Set<&'static str> = phf_set! { "F", "Cl", "Br", "I" };

static LIGAND_PARTIAL_CHARGES: Map<&'static str, f64> = phf_map! {
    "C" => 0.05, "N" => -0.35, "O" => -0.38, "S" => -0.15, "P" => 0.45, "H" => 0.15,
    "F" => -0.20, "Cl" => -0.08, "Br" => -0.06, "I" => -0.04,
};

static RECEPTOR_PARTIAL_CHARGES: Map<&'static str, f64> = phf_map! {
    "C" => 0.07, "N" => -0.47, "O" => -0.51, "S" => -0.23, "H" => 0.31,
};

static LIGAND_ATOM_TYPES: Map<&'static str, &'static str> = phf_map! {
    "C" => "C", "N" => "NA", "O" => "OA", "S" => "SA", "H" => "HD",
    "F" => "F", "Cl" => "Cl", "Br" => "Br", "I" => "I", "P" => "P",
};

static RECEPTOR_ATOM_TYPES: Map<&'static str, &'static str> = phf_map! {
    "C" => "C", "N" => "N", "O" => "OA", "S" => "SA", "H" => "HD",
};

/// Atom type for elements missing from the role's table.
pub const DEFAULT_ATOM_TYPE: &str = "A";

pub fn atomic_mass(element: &str) -> f64 {
    ATOMIC_MASSES
        .get(element)
        .copied()
        .unwrap_or(DEFAULT_ATOMIC_MASS)
}

pub fn is_halogen(element: &str) -> bool {
    HALOGENS.contains(element)
}

/// Looks up the fixed partial charge for an element in the given role, defaulting to 0.
pub fn partial_charge(element: &str, role: StructureRole) -> f64 {
    let table = match role {
        StructureRole::Ligand => &LIGAND_PARTIAL_CHARGES,
        StructureRole::Receptor => &RECEPTOR_PARTIAL_CHARGES,
    };
    table.get(element).copied().unwrap_or(0.0)
}

/// Two-letter donor/acceptor type code written to the extended format.
pub fn atom_type(element: &str, role: StructureRole) -> &'static str {
    let table = match role {
        StructureRole::Ligand => &LIGAND_ATOM_TYPES,
        StructureRole::Receptor => &RECEPTOR_ATOM_TYPES,
    };
    table.get(element).copied().unwrap_or(DEFAULT_ATOM_TYPE)
}
