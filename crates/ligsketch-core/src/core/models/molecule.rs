use super::atom::{Atom, StructureRole};
use super::topology::{Bond, BondOrder};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Bond references atom {index}, but the molecule only has {count} atoms")]
    UnknownAtom { index: usize, count: usize },
    #[error("Bond cannot connect atom {0} to itself")]
    SelfBond(usize),
}

/// A set of atoms and the bonds between them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    role: StructureRole,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    torsions: u32,
}

impl Molecule {
    pub fn new(role: StructureRole) -> Self {
        Self {
            role,
            atoms: Vec::new(),
            bonds: Vec::new(),
            torsions: 0,
        }
    }

    pub fn role(&self) -> StructureRole {
        self.role
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Rotatable-bond count reported by the extended format. Always 0 for receptors.
    pub fn torsions(&self) -> u32 {
        match self.role {
            StructureRole::Ligand => self.torsions,
            StructureRole::Receptor => 0,
        }
    }

    pub fn set_torsions(&mut self, torsions: u32) {
        self.torsions = torsions;
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Appends an atom and returns its 0-based position.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Adds a bond after checking that both ends exist and differ.
    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) -> Result<(), ModelError> {
        let count = self.atoms.len();
        for index in [atom1, atom2] {
            if index >= count {
                return Err(ModelError::UnknownAtom { index, count });
            }
        }
        if atom1 == atom2 {
            return Err(ModelError::SelfBond(atom1));
        }
        self.bonds.push(Bond::new(atom1, atom2, order));
        Ok(())
    }

    /// Bonds every consecutive pair of atoms `(i, i + 1)` with the same order.
    pub(crate) fn bond_sequentially(&mut self, order: BondOrder) {
        self.bonds
            .extend((1..self.atoms.len()).map(|i| Bond::new(i - 1, i, order)));
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Split borrow used by the relaxation: atoms mutable, bonds read-only.
    pub(crate) fn atoms_and_bonds_mut(&mut self) -> (&mut [Atom], &[Bond]) {
        (&mut self.atoms, &self.bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atom_molecule() -> Molecule {
        let mut molecule = Molecule::new(StructureRole::Ligand);
        molecule.add_atom(Atom::new("C", 1, Point3::origin()));
        molecule.add_atom(Atom::new("O", 2, Point3::new(1.4, 0.0, 0.0)));
        molecule
    }

    #[test]
    fn add_bond_accepts_existing_distinct_atoms() {
        let mut molecule = two_atom_molecule();
        assert!(molecule.add_bond(0, 1, BondOrder::Single).is_ok());
        assert_eq!(molecule.bonds().len(), 1);
    }

    #[test]
    fn add_bond_rejects_unknown_atoms() {
        let mut molecule = two_atom_molecule();
        assert_eq!(
            molecule.add_bond(0, 2, BondOrder::Single),
            Err(ModelError::UnknownAtom { index: 2, count: 2 })
        );
        assert!(molecule.bonds().is_empty());
    }

    #[test]
    fn add_bond_rejects_self_bonds() {
        let mut molecule = two_atom_molecule();
        assert_eq!(
            molecule.add_bond(1, 1, BondOrder::Double),
            Err(ModelError::SelfBond(1))
        );
    }

    #[test]
    fn receptors_never_report_torsions() {
        let mut ligand = Molecule::new(StructureRole::Ligand);
        ligand.set_torsions(4);
        assert_eq!(ligand.torsions(), 4);

        let mut receptor = Molecule::new(StructureRole::Receptor);
        receptor.set_torsions(4);
        assert_eq!(receptor.torsions(), 0);
    }

    #[test]
    fn sequential_bonds_link_neighbours() {
        let mut molecule = two_atom_molecule();
        molecule.add_atom(Atom::new("N", 3, Point3::new(2.8, 0.0, 0.0)));
        molecule.bond_sequentially(BondOrder::Double);
        assert_eq!(
            molecule.bonds(),
            &[Bond::new(0, 1, BondOrder::Double), Bond::new(1, 2, BondOrder::Double)]
        );
    }

    #[test]
    fn sequential_bonds_on_single_atom_are_empty() {
        let mut molecule = Molecule::new(StructureRole::Ligand);
        molecule.add_atom(Atom::new("C", 1, Point3::origin()));
        molecule.bond_sequentially(BondOrder::Single);
        assert!(molecule.bonds().is_empty());
    }

    #[test]
    fn new_molecule_is_empty() {
        let molecule = Molecule::new(StructureRole::Receptor);
        assert!(molecule.is_empty());
        assert_eq!(molecule.role(), StructureRole::Receptor);
    }
}
