//! Provides input/output functionality for fixed-column structure formats.
//!
//! Both formats share one column schema ([`columns`]) so that writing and re-reading a
//! structure is lossless to the written precision.

pub mod columns;
pub mod format;
pub mod pdb;
pub mod pdbqt;
pub mod traits;
