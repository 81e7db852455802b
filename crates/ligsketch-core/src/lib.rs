//! # ligsketch Core Library
//!
//! Deterministic ligand modeling from formula text: a synthetic 3D layout, physicochemical
//! descriptors, a reproducible binding-affinity estimate against a receptor catalogue, and
//! ranked non-covalent interactions.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `Atom`, `Bond`), text
//!   chemistry (formula tokens, element tables, descriptors) and fixed-column structure I/O.
//!
//! - **[`engine`]: The Logic Core.** Geometric relaxation, the contact classifier, and the
//!   per-receptor affinity models with their configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures (`synthesize`, `profile`,
//!   `analyze`, `screen`) built from the two layers below.
//!
//! ## Determinism
//!
//! No unseeded randomness exists anywhere in the modeling path. Every variation is derived
//! from a stable hash of the input text, so equal inputs produce bit-identical outputs across
//! calls, threads and processes.

pub mod core;
pub mod engine;
pub mod workflows;
