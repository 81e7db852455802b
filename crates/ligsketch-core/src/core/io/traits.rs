use crate::core::models::atom::StructureRole;
use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing fixed-column structure formats.
///
/// Implementors handle the format-specific layout; the provided methods add file-path and
/// in-memory text conveniences on top of the two required stream operations.
pub trait StructureFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `role` - Whether the records describe a ligand or a receptor.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be parsed or the reader fails.
    fn read_from(reader: &mut impl BufRead, role: StructureRole) -> Result<Molecule, Self::Error>;

    /// Writes a molecule as atom records, connectivity records and an end marker.
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not fit its column or the writer fails.
    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Parses structure text held in memory.
    fn from_text(text: &str, role: StructureRole) -> Result<Molecule, Self::Error> {
        let mut reader = text.as_bytes();
        Self::read_from(&mut reader, role)
    }

    /// Renders a molecule to an in-memory string.
    fn to_text(molecule: &Molecule) -> Result<String, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(molecule, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Reads a molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P, role: StructureRole) -> Result<Molecule, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, role)
    }

    /// Writes a molecule to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(molecule: &Molecule, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(molecule, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
