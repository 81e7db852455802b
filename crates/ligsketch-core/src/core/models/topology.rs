#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
}

impl BondOrder {
    /// Order used for every bond of a synthesized chain.
    ///
    /// A single `=` anywhere in the formula promotes *all* bonds to double. This global flag is
    /// a known limitation kept for output compatibility, not per-bond detection.
    pub fn for_formula(formula: &str) -> Self {
        if formula.contains('=') {
            BondOrder::Double
        } else {
            BondOrder::Single
        }
    }
}

/// A bond between two atoms, addressed by their 0-based position in the molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize, order: BondOrder) -> Self {
        Self {
            atom1,
            atom2,
            order,
        }
    }
}
