use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use crate::core::models::molecule::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Structure I/O failed: {source}")]
    Structure {
        #[from]
        source: PdbError,
    },

    #[error("Inconsistent molecule: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Neither a structure nor a formula was supplied for the {0}")]
    MissingInput(&'static str),
}
