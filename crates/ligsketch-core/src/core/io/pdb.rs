use super::columns::{
    ATOM_LINE_WIDTH, ATOM_NAME, CHAIN_ID, CONECT_ORIGIN, CONECT_PARTNERS, Column, ELEMENT,
    FieldOverflow, OCCUPANCY, RECORD_NAME, RESIDUE_NAME, RESIDUE_NUMBER, RecordBuffer, SERIAL,
    TEMPERATURE, X, Y, Z,
};
use super::traits::StructureFile;
use crate::core::models::atom::{Atom, StructureRole};
use crate::core::models::molecule::{ModelError, Molecule};
use crate::core::models::topology::BondOrder;
use nalgebra::Point3;
use std::collections::{BTreeSet, HashMap};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

pub const LIGAND_RESIDUE: &str = "LIG";
pub const RECEPTOR_RESIDUE: &str = "UNK";
const DEFAULT_CHAIN: &str = "A";
const DEFAULT_RESIDUE_NUMBER: i32 = 1;
const OCCUPANCY_PLACEHOLDER: &str = "1.00";
const TEMPERATURE_PLACEHOLDER: &str = "0.00";
/// Longer than the record-name column, so it is matched by prefix.
const TORSDOF_RECORD: &str = "TORSDOF";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Cannot write record: {0}")]
    Overflow(#[from] FieldOverflow),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Invalid TORSDOF record")]
    InvalidTorsdof,
}

/// Plain PDB-style atom and connectivity records.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead, role: StructureRole) -> Result<Molecule, Self::Error> {
        read_records(reader, role, |line, name, role| {
            let element = ELEMENT.read(line);
            if element.is_empty() {
                element_from_name(name, role)
            } else {
                normalize_element(&element)
            }
        })
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        for atom in molecule.atoms() {
            let mut buffer = atom_record(atom, molecule.role())?;
            buffer.put(&ELEMENT, &atom.element)?;
            writeln!(writer, "{}", buffer.finish())?;
        }
        write_conect(molecule, writer)?;
        writeln!(writer, "END")?;
        Ok(())
    }
}

/// Fills the columns shared by the plain and extended atom records.
pub(crate) fn atom_record(atom: &Atom, role: StructureRole) -> Result<RecordBuffer, FieldOverflow> {
    let record_name = match role {
        StructureRole::Ligand => "HETATM",
        StructureRole::Receptor => "ATOM",
    };
    let default_residue = match role {
        StructureRole::Ligand => LIGAND_RESIDUE,
        StructureRole::Receptor => RECEPTOR_RESIDUE,
    };
    let residue = atom.residue.as_deref().unwrap_or(default_residue);
    let residue_number = atom.residue_number.unwrap_or(DEFAULT_RESIDUE_NUMBER);

    let mut buffer = RecordBuffer::new(ATOM_LINE_WIDTH);
    buffer
        .put(&RECORD_NAME, record_name)?
        .put(&SERIAL, &atom.index.to_string())?
        .put(&ATOM_NAME, &atom.name)?
        .put(&RESIDUE_NAME, residue)?
        .put(&CHAIN_ID, DEFAULT_CHAIN)?
        .put(&RESIDUE_NUMBER, &residue_number.to_string())?
        .put(&X, &format!("{:.3}", atom.position.x))?
        .put(&Y, &format!("{:.3}", atom.position.y))?
        .put(&Z, &format!("{:.3}", atom.position.z))?
        .put(&OCCUPANCY, OCCUPANCY_PLACEHOLDER)?
        .put(&TEMPERATURE, TEMPERATURE_PLACEHOLDER)?;
    Ok(buffer)
}

/// Writes one `CONECT` record per bond.
pub(crate) fn write_conect(molecule: &Molecule, writer: &mut impl Write) -> Result<(), PdbError> {
    let atoms = molecule.atoms();
    for bond in molecule.bonds() {
        let (Some(a1), Some(a2)) = (atoms.get(bond.atom1), atoms.get(bond.atom2)) else {
            return Err(PdbError::Inconsistency(format!(
                "Bond {}-{} references a missing atom",
                bond.atom1, bond.atom2
            )));
        };
        let mut buffer = RecordBuffer::new(CONECT_PARTNERS[0].end());
        buffer
            .put(&RECORD_NAME, "CONECT")?
            .put(&CONECT_ORIGIN, &a1.index.to_string())?
            .put(&CONECT_PARTNERS[0], &a2.index.to_string())?;
        writeln!(writer, "{}", buffer.finish())?;
    }
    Ok(())
}

/// Reads atom, connectivity and torsion records up to the first `END`.
///
/// `element_of` decides the element symbol from the full line and the atom name, which is
/// where the plain and extended formats differ.
pub(crate) fn read_records<F>(
    reader: &mut impl BufRead,
    role: StructureRole,
    element_of: F,
) -> Result<Molecule, PdbError>
where
    F: Fn(&str, &str, StructureRole) -> String,
{
    let mut molecule = Molecule::new(role);
    let mut serial_to_position: HashMap<usize, usize> = HashMap::new();
    let mut conect_pairs: BTreeSet<(usize, usize)> = BTreeSet::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        let record = if line.starts_with(TORSDOF_RECORD) {
            TORSDOF_RECORD.to_string()
        } else {
            RECORD_NAME.read(&line)
        };

        match record.as_str() {
            "ATOM" | "HETATM" => {
                let serial = parse_int::<usize>(&line, line_num, &SERIAL)?;
                let name = ATOM_NAME.read(&line);
                if name.is_empty() {
                    return Err(PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::MissingRequiredField {
                            columns: ATOM_NAME.range(),
                        },
                    });
                }
                let residue = Some(RESIDUE_NAME.read(&line)).filter(|r| !r.is_empty());
                let residue_number = if RESIDUE_NUMBER.read(&line).is_empty() {
                    None
                } else {
                    Some(parse_int::<i32>(&line, line_num, &RESIDUE_NUMBER)?)
                };
                let position = Point3::new(
                    parse_float(&line, line_num, &X)?,
                    parse_float(&line, line_num, &Y)?,
                    parse_float(&line, line_num, &Z)?,
                );
                let element = element_of(&line, &name, role);

                let atom = Atom {
                    element,
                    name,
                    position,
                    index: serial,
                    residue,
                    residue_number,
                };
                let position_idx = molecule.add_atom(atom);
                if serial_to_position.insert(serial, position_idx).is_some() {
                    return Err(PdbError::Inconsistency(format!(
                        "Duplicate atom serial: {}",
                        serial
                    )));
                }
            }
            "CONECT" => {
                let origin = parse_int::<usize>(&line, line_num, &CONECT_ORIGIN)?;
                for column in &CONECT_PARTNERS {
                    if column.read(&line).is_empty() {
                        continue;
                    }
                    let partner = parse_int::<usize>(&line, line_num, column)?;
                    if partner != origin {
                        conect_pairs.insert((origin.min(partner), origin.max(partner)));
                    }
                }
            }
            TORSDOF_RECORD => {
                let torsions = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|v| v.parse::<u32>().ok())
                    .ok_or(PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidTorsdof,
                    })?;
                molecule.set_torsions(torsions);
            }
            "END" | "ENDMDL" => break,
            _ => {}
        }
    }

    for (s1, s2) in conect_pairs {
        match (serial_to_position.get(&s1), serial_to_position.get(&s2)) {
            (Some(&a1), Some(&a2)) => molecule.add_bond(a1, a2, BondOrder::Single)?,
            _ => debug!("Skipping CONECT {}-{}: serial not present in atom records.", s1, s2),
        }
    }

    Ok(molecule)
}

fn parse_int<T: std::str::FromStr>(line: &str, line_num: usize, column: &Column) -> Result<T, PdbError> {
    let value = column.read(line);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: column.range(),
            value,
        },
    })
}

fn parse_float(line: &str, line_num: usize, column: &Column) -> Result<f64, PdbError> {
    let value = column.read(line);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: column.range(),
            value,
        },
    })
}

/// Canonical capitalization of an element symbol (`CL` -> `Cl`).
pub(crate) fn normalize_element(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Guesses the element from an atom name when no element column is present.
///
/// Ligand names are element + serial (`Cl4`), so a lowercase second letter is kept. Receptor
/// names follow PDB convention (`CA`, `OD1`) and the element is the first letter.
pub(crate) fn element_from_name(name: &str, role: StructureRole) -> String {
    let letters: Vec<char> = name.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    match (role, letters.as_slice()) {
        (_, []) => "X".to_string(),
        (StructureRole::Ligand, [first, second, ..]) if second.is_ascii_lowercase() => {
            format!("{}{}", first.to_ascii_uppercase(), second)
        }
        (_, [first, ..]) => first.to_ascii_uppercase().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethanol() -> Molecule {
        let mut molecule = Molecule::new(StructureRole::Ligand);
        molecule.add_atom(Atom::new("C", 1, Point3::new(1.5, 0.0, 0.0)));
        molecule.add_atom(Atom::new("C", 2, Point3::new(-1.057, 0.968, 0.443)));
        molecule.add_atom(Atom::new("O", 3, Point3::new(0.101, -1.234, 0.847)));
        molecule.add_bond(0, 1, BondOrder::Single).unwrap();
        molecule.add_bond(1, 2, BondOrder::Single).unwrap();
        molecule
    }

    #[test]
    fn writes_atom_conect_and_end_lines() {
        let text = PdbFile::to_text(&ethanol()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[..3].iter().all(|l| l.starts_with("HETATM")));
        assert!(lines[3..5].iter().all(|l| l.starts_with("CONECT")));
        assert_eq!(lines[5], "END");
    }

    #[test]
    fn atom_line_matches_fixed_column_layout() {
        let text = PdbFile::to_text(&ethanol()).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "HETATM    1 C1   LIG A   1       1.500   0.000   0.000  1.00  0.00           C"
        );
    }

    #[test]
    fn conect_line_lists_both_serials() {
        let text = PdbFile::to_text(&ethanol()).unwrap();
        let conect = text.lines().nth(3).unwrap();
        assert_eq!(conect, "CONECT    1    2");
    }

    #[test]
    fn receptor_atoms_are_written_as_atom_records() {
        let mut receptor = Molecule::new(StructureRole::Receptor);
        receptor.add_atom(
            Atom::new("N", 1, Point3::new(10.0, -2.5, 3.25))
                .with_name("N")
                .with_residue("LYS", 42),
        );
        let text = PdbFile::to_text(&receptor).unwrap();
        assert!(text.starts_with("ATOM      1 N    LYS A  42"));
    }

    #[test]
    fn empty_molecule_writes_only_end() {
        let text = PdbFile::to_text(&Molecule::new(StructureRole::Ligand)).unwrap();
        assert_eq!(text, "END\n");
    }

    #[test]
    fn reads_back_atoms_and_bonds() {
        let text = PdbFile::to_text(&ethanol()).unwrap();
        let parsed = PdbFile::from_text(&text, StructureRole::Ligand).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.bonds().len(), 2);
        assert_eq!(parsed.atoms()[2].element, "O");
        assert_eq!(parsed.atoms()[2].residue.as_deref(), Some("LIG"));
        assert_eq!(parsed.atoms()[2].residue_number, Some(1));
    }

    #[test]
    fn reading_stops_at_end_and_skips_unknown_records() {
        let text = "REMARK generated\n\
                    ATOM      1  CA  ALA A   5      11.104   6.134  -6.504  1.00  0.00           C\n\
                    TER\n\
                    END\n\
                    ATOM      2  CB  ALA A   5      11.639   6.071  -5.147  1.00  0.00           C\n";
        let parsed = PdbFile::from_text(text, StructureRole::Receptor).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.atoms()[0].residue_label(), "ALA5");
        assert_eq!(parsed.atoms()[0].name, "CA");
    }

    #[test]
    fn element_falls_back_to_atom_name() {
        let text = "ATOM      1  OD1 ASP A  25       1.000   2.000   3.000  1.00  0.00\n";
        let parsed = PdbFile::from_text(text, StructureRole::Receptor).unwrap();
        assert_eq!(parsed.atoms()[0].element, "O");
    }

    #[test]
    fn invalid_coordinate_reports_line_and_columns() {
        let text = "HETATM    1 C1   LIG A   1       abc     0.000   0.000  1.00  0.00           C\n";
        let err = PdbFile::from_text(text, StructureRole::Ligand).unwrap_err();
        match err {
            PdbError::Parse { line, kind } => {
                assert_eq!(line, 1);
                assert!(matches!(kind, PdbParseErrorKind::InvalidFloat { ref columns, .. } if columns == "31-38"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_serials_are_rejected() {
        let line = "HETATM    1 C1   LIG A   1       0.000   0.000   0.000  1.00  0.00           C\n";
        let text = format!("{line}{line}");
        assert!(matches!(
            PdbFile::from_text(&text, StructureRole::Ligand),
            Err(PdbError::Inconsistency(_))
        ));
    }

    #[test]
    fn conect_to_unknown_serial_is_skipped() {
        let text = "HETATM    1 C1   LIG A   1       0.000   0.000   0.000  1.00  0.00           C\n\
                    CONECT    1    7\n\
                    END\n";
        let parsed = PdbFile::from_text(text, StructureRole::Ligand).unwrap();
        assert!(parsed.bonds().is_empty());
    }

    #[test]
    fn oversized_coordinates_are_rejected_on_write() {
        let mut molecule = Molecule::new(StructureRole::Ligand);
        molecule.add_atom(Atom::new("C", 1, Point3::new(123456.0, 0.0, 0.0)));
        assert!(matches!(PdbFile::to_text(&molecule), Err(PdbError::Overflow(_))));
    }

    #[test]
    fn element_helpers_normalize_symbols() {
        assert_eq!(normalize_element("CL"), "Cl");
        assert_eq!(normalize_element("c"), "C");
        assert_eq!(element_from_name("Cl4", StructureRole::Ligand), "Cl");
        assert_eq!(element_from_name("CA", StructureRole::Receptor), "C");
        assert_eq!(element_from_name("12", StructureRole::Ligand), "X");
    }

    #[test]
    fn writes_and_reads_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ethanol.pdb");
        PdbFile::write_to_path(&ethanol(), &path).unwrap();
        let parsed = PdbFile::read_from_path(&path, StructureRole::Ligand).unwrap();
        assert_eq!(parsed.len(), 3);
    }
}
