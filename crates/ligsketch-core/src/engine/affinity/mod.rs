//! Formula-based affinity estimation against a catalogue of receptors.

pub mod contacts;
pub mod models;
pub mod scorer;

pub use models::{BindingMode, ReceptorKind, ReceptorTarget};
pub use scorer::{AffinityResult, score};
