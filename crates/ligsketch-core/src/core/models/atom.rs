use nalgebra::Point3;

/// Whether a structure describes the small molecule or the receptor it binds to.
///
/// The role selects the record type on output, the partial-charge table, and the atom-type
/// code used by the extended format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureRole {
    #[default]
    Ligand,
    Receptor,
}

/// Width of the atom-name column in structure text.
const NAME_WIDTH: usize = 4;

/// A single atom of a synthesized or parsed structure.
///
/// `index` is the 1-based serial written to structure text; it is assigned once and never
/// changes. `position` is only mutated while the relaxation owns the molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol, e.g. `C` or `Cl`.
    pub element: String,
    /// Atom name as written in the name column (e.g. `C1`, `CA`).
    pub name: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    /// 1-based serial number.
    pub index: usize,
    /// Three-letter residue tag, if any.
    pub residue: Option<String>,
    pub residue_number: Option<i32>,
}

impl Atom {
    /// Creates a ligand-style atom named after its element and serial (`C1`, `O3`).
    ///
    /// When element and serial together overflow the name column the name is the bare element;
    /// the serial is still written in its own column and kept in [`Atom::label`].
    pub fn new(element: &str, index: usize, position: Point3<f64>) -> Self {
        let mut name = format!("{element}{index}");
        if name.len() > NAME_WIDTH {
            name = element.chars().take(NAME_WIDTH).collect();
        }
        Self {
            element: element.to_string(),
            name,
            position,
            index,
            residue: None,
            residue_number: None,
        }
    }

    pub fn with_residue(mut self, residue: &str, residue_number: i32) -> Self {
        self.residue = Some(residue.to_string());
        self.residue_number = Some(residue_number);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Label used for the ligand side of an interaction record.
    pub fn label(&self) -> String {
        format!("{}{}", self.element, self.index)
    }

    /// Label used for the receptor side of an interaction record, e.g. `ASP25`.
    pub fn residue_label(&self) -> String {
        match (&self.residue, self.residue_number) {
            (Some(name), Some(number)) => format!("{name}{number}"),
            (Some(name), None) => name.clone(),
            (None, Some(number)) => format!("UNK{number}"),
            (None, None) => "UNK".to_string(),
        }
    }

    pub fn distance_to(&self, other: &Atom) -> f64 {
        (self.position - other.position).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_is_named_after_element_and_serial() {
        let atom = Atom::new("Cl", 4, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.name, "Cl4");
        assert_eq!(atom.label(), "Cl4");
        assert_eq!(atom.residue, None);
        assert_eq!(atom.residue_number, None);
    }

    #[test]
    fn long_serials_keep_the_name_within_its_column() {
        let chlorine = Atom::new("Cl", 100, Point3::origin());
        assert_eq!(chlorine.name, "Cl");
        assert_eq!(chlorine.label(), "Cl100");

        let carbon = Atom::new("C", 1000, Point3::origin());
        assert_eq!(carbon.name, "C");
        assert_eq!(carbon.label(), "C1000");

        assert_eq!(Atom::new("C", 999, Point3::origin()).name, "C999");
        assert_eq!(Atom::new("Br", 99, Point3::origin()).name, "Br99");
    }

    #[test]
    fn residue_label_combines_name_and_number() {
        let atom = Atom::new("O", 1, Point3::origin()).with_residue("ASP", 25);
        assert_eq!(atom.residue_label(), "ASP25");
    }

    #[test]
    fn residue_label_falls_back_to_unknown() {
        let atom = Atom::new("O", 1, Point3::origin());
        assert_eq!(atom.residue_label(), "UNK");
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Atom::new("C", 1, Point3::new(0.0, 0.0, 0.0));
        let b = Atom::new("C", 2, Point3::new(3.0, 4.0, 0.0));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
