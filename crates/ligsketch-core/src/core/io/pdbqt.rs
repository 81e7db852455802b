use super::columns::{ATOM_TYPE, PARTIAL_CHARGE};
use super::pdb::{PdbError, atom_record, element_from_name, read_records, write_conect};
use super::traits::StructureFile;
use crate::core::chem::elements::{atom_type, partial_charge};
use crate::core::models::atom::StructureRole;
use crate::core::models::molecule::Molecule;
use phf::{Map, phf_map};
use std::io::{BufRead, Write};

static TYPE_ELEMENTS: Map<&'static str, &'static str> = phf_map! {
    "C" => "C", "N" => "N", "NA" => "N", "OA" => "O", "SA" => "S", "HD" => "H", "H" => "H",
    "F" => "F", "Cl" => "Cl", "Br" => "Br", "I" => "I", "P" => "P",
};

/// Extended records carrying a partial-charge column, a donor/acceptor type code, and a
/// trailing `TORSDOF` record with the rotatable-bond count.
pub struct PdbqtFile;

impl StructureFile for PdbqtFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead, role: StructureRole) -> Result<Molecule, Self::Error> {
        read_records(reader, role, |line, name, role| {
            TYPE_ELEMENTS
                .get(ATOM_TYPE.read(line).as_str())
                .map(|e| e.to_string())
                .unwrap_or_else(|| element_from_name(name, role))
        })
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        let role = molecule.role();
        for atom in molecule.atoms() {
            let charge = partial_charge(&atom.element, role);
            let mut buffer = atom_record(atom, role)?;
            buffer
                .put(&PARTIAL_CHARGE, &format!("{:+.3}", charge))?
                .put(&ATOM_TYPE, atom_type(&atom.element, role))?;
            writeln!(writer, "{}", buffer.finish())?;
        }
        write_conect(molecule, writer)?;
        writeln!(writer, "TORSDOF {}", molecule.torsions())?;
        writeln!(writer, "END")?;
        Ok(())
    }
}
