//! # Engine Module
//!
//! The modeling algorithms that turn tokens and coordinates into structures and scores.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Relaxation and analysis tunables with a validating builder
//! - **Relaxation** ([`relaxation`]) - Damped spring iteration toward ideal bond lengths
//! - **Interaction Analysis** ([`interactions`]) - Distance-gated contact classification between
//!   two coordinate sets
//! - **Affinity Scoring** ([`affinity`]) - Per-receptor parametric models and the
//!   formula-derived interactions attached to their results
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for batch work
//! - **Error Handling** ([`error`]) - The error type surfaced by workflows
//!
//! Every algorithm here is synchronous and deterministic. Scoring derives all of its
//! variation from [`crate::core::utils::rng`].

pub mod affinity;
pub mod config;
pub mod error;
pub mod interactions;
pub mod progress;
pub mod relaxation;
