//! # Workflows Module
//!
//! Top-level entry points of the library. Each workflow ties the [`crate::core`] foundations
//! and the [`crate::engine`] algorithms together into one complete procedure:
//!
//! - **Synthesis** ([`synthesize`]) - Formula to relaxed 3D ligand
//! - **Profile** ([`profile`]) - Structure text, descriptors and affinity for one ligand
//! - **Analysis** ([`analyze`]) - Geometric contacts between ligand and receptor coordinates
//! - **Screening** ([`screen`]) - Parallel affinity ranking of a ligand library
//!
//! [`resolve_ligand`] implements the input fallback shared by callers that accept either a
//! pre-existing structure or a formula.

pub mod analyze;
pub mod profile;
pub mod screen;
pub mod synthesize;

use crate::core::io::format::StructureFormat;
use crate::core::models::atom::StructureRole;
use crate::core::models::molecule::Molecule;
use crate::engine::config::RelaxationConfig;
use crate::engine::error::EngineError;
use tracing::{info, warn};

/// Produces a ligand from a supplied structure, or synthesizes one from the formula.
///
/// Supplied text is parsed in whichever format it appears to be. Text that is blank, fails to
/// parse, or holds no atom records falls through to synthesis.
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] if neither input is present, or the parse error of a
/// bad structure when there is no formula to fall back on.
pub fn resolve_ligand(
    structure: Option<&str>,
    formula: Option<&str>,
    config: &RelaxationConfig,
) -> Result<Molecule, EngineError> {
    let mut parse_error = None;

    if let Some(text) = structure.filter(|t| !t.trim().is_empty()) {
        let format = StructureFormat::detect(text);
        match format.parse(text, StructureRole::Ligand) {
            Ok(molecule) if !molecule.is_empty() => {
                info!(atoms = molecule.len(), %format, "Using supplied ligand structure.");
                return Ok(molecule);
            }
            Ok(_) => warn!("Supplied ligand structure has no atom records."),
            Err(e) => {
                warn!(error = %e, "Could not parse supplied ligand structure.");
                parse_error = Some(e);
            }
        }
    }

    match (formula, parse_error) {
        (Some(formula), _) => {
            info!("Synthesizing ligand from formula.");
            Ok(synthesize::run(formula, config))
        }
        (None, Some(e)) => Err(e.into()),
        (None, None) => Err(EngineError::MissingInput("ligand")),
    }
}
