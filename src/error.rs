//! Error taxonomy for the evolutionary engine.
//!
//! The engine performs no I/O, so every error is a precondition failure
//! reported at a boundary (configuration, population construction, loop
//! entry, or genotype construction from caller-supplied data).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvolveError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid genotype: {0}")]
    InvalidGenotype(String),
}

pub type Result<T> = std::result::Result<T, EvolveError>;
