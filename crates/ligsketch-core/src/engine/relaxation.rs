use super::config::RelaxationConfig;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use tracing::trace;

/// Equilibrium length for a bond of the given order, in Angstroms.
pub fn ideal_bond_length(order: BondOrder, config: &RelaxationConfig) -> f64 {
    match order {
        BondOrder::Single => config.single_bond_length,
        BondOrder::Double => config.double_bond_length,
    }
}

/// Pulls bonded atoms toward their ideal separation with a damped spring.
///
/// Runs exactly `config.iterations` sweeps over every bond. Each bond moves both of its atoms
/// symmetrically by half of `(length - ideal) * spring_constant` along the bond axis. A bond
/// whose atoms coincide is skipped for that sweep.
pub fn relax(molecule: &mut Molecule, config: &RelaxationConfig) {
    let (atoms, bonds) = molecule.atoms_and_bonds_mut();
    for _ in 0..config.iterations {
        for bond in bonds {
            let displacement = atoms[bond.atom2].position - atoms[bond.atom1].position;
            let length = displacement.norm();
            if length == 0.0 {
                continue;
            }
            let force = (length - ideal_bond_length(bond.order, config)) * config.spring_constant;
            let shift = displacement / length * (force / 2.0);
            atoms[bond.atom1].position += shift;
            atoms[bond.atom2].position -= shift;
        }
    }
    trace!(
        "Relaxation finished with mean bond deviation {:.4} Å.",
        mean_bond_deviation(molecule, config)
    );
}

/// Mean absolute difference between current and ideal bond lengths; 0 for a bond-free molecule.
pub fn mean_bond_deviation(molecule: &Molecule, config: &RelaxationConfig) -> f64 {
    let bonds = molecule.bonds();
    if bonds.is_empty() {
        return 0.0;
    }
    let atoms = molecule.atoms();
    let total: f64 = bonds
        .iter()
        .map(|b| {
            let length = atoms[b.atom1].distance_to(&atoms[b.atom2]);
            (length - ideal_bond_length(b.order, config)).abs()
        })
        .sum();
    total / bonds.len() as f64
}
