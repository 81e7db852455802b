use super::pdb::{PdbError, PdbFile};
use super::pdbqt::PdbqtFile;
use super::traits::StructureFile;
use crate::core::models::atom::StructureRole;
use crate::core::models::molecule::Molecule;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Records that only appear in the extended format.
const PDBQT_MARKERS: [&str; 4] = ["TORSDOF", "ROOT", "BRANCH", "ENDROOT"];

/// The two supported structure text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureFormat {
    #[default]
    Pdb,
    Pdbqt,
}

impl StructureFormat {
    /// Guesses the format of structure text from its record names.
    pub fn detect(text: &str) -> Self {
        let extended = text
            .lines()
            .any(|line| PDBQT_MARKERS.iter().any(|marker| line.starts_with(marker)));
        if extended { Self::Pdbqt } else { Self::Pdb }
    }

    /// Picks a format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Pdbqt => "pdbqt",
        }
    }

    pub fn parse(self, text: &str, role: StructureRole) -> Result<Molecule, PdbError> {
        match self {
            Self::Pdb => PdbFile::from_text(text, role),
            Self::Pdbqt => PdbqtFile::from_text(text, role),
        }
    }

    pub fn render(self, molecule: &Molecule) -> Result<String, PdbError> {
        match self {
            Self::Pdb => PdbFile::to_text(molecule),
            Self::Pdbqt => PdbqtFile::to_text(molecule),
        }
    }
}

impl FromStr for StructureFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdb" => Ok(Self::Pdb),
            "pdbqt" => Ok(Self::Pdbqt),
            other => Err(format!("unknown structure format '{other}'")),
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
