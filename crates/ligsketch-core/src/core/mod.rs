//! # Core Module
//!
//! Stateless foundations of the modeling pipeline.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds and the molecule container
//! - **Text Chemistry** ([`chem`]) - Formula tokenizer, element tables, descriptors, sequences
//! - **File I/O** ([`io`]) - Fixed-column structure records and their shared schema
//! - **Utilities** ([`utils`]) - Stable hashing, seeded randomness and geometry helpers
//!
//! Nothing in this layer holds mutable state beyond read-only constant tables, and nothing
//! draws from an unseeded random source.

pub mod chem;
pub mod io;
pub mod models;
pub mod utils;
