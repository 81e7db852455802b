use crate::core::chem::descriptors::MolecularDescriptors;
use crate::core::chem::formula::tokenize;
use crate::core::models::atom::{Atom, StructureRole};
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use crate::core::utils::geometry::{calculate_rmsd, helix_position};
use crate::engine::config::RelaxationConfig;
use crate::engine::relaxation::{mean_bond_deviation, relax};
use tracing::{debug, info, instrument};

/// Builds a relaxed 3D ligand from a formula string.
///
/// Tokens are placed along a golden-angle helix, chained by sequential bonds whose order is
/// double for every bond when the formula contains `=` anywhere, and then relaxed. The
/// rotatable-bond descriptor becomes the molecule's torsion count.
///
/// Never fails: a formula without element tokens yields an empty molecule.
#[instrument(skip_all, name = "synthesize_workflow", fields(formula = formula))]
pub fn run(formula: &str, config: &RelaxationConfig) -> Molecule {
    let tokens = tokenize(formula);
    let mut molecule = Molecule::new(StructureRole::Ligand);
    for (i, element) in tokens.iter().enumerate() {
        molecule.add_atom(Atom::new(element, i + 1, helix_position(i)));
    }

    let order = BondOrder::for_formula(formula);
    molecule.bond_sequentially(order);

    let placed = molecule.positions();
    let before = mean_bond_deviation(&molecule, config);
    relax(&mut molecule, config);
    debug!(
        before,
        after = mean_bond_deviation(&molecule, config),
        displacement_rmsd = calculate_rmsd(&placed, &molecule.positions()).unwrap_or(0.0),
        "Relaxed bond lengths."
    );

    molecule.set_torsions(MolecularDescriptors::from_formula(formula).rotatable_bonds);

    info!(
        atoms = molecule.len(),
        bonds = molecule.bonds().len(),
        order = ?order,
        "Synthesized ligand geometry."
    );
    molecule
}
