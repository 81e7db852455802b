//! # Core Models Module
//!
//! Data structures shared by every stage of the pipeline: atoms with their serial and
//! residue identity, bonds with a fixed order, and the [`molecule::Molecule`] container that
//! owns both and enforces the bond invariants.
//!
//! - [`atom`] - Atoms and the ligand/receptor role of the structure they belong to
//! - [`topology`] - Bonds and bond orders
//! - [`molecule`] - The atom/bond container

pub mod atom;
pub mod molecule;
pub mod topology;
