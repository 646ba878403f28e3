//! Elitist evolutionary search engine.
//!
//! Evolves a fixed-size population of candidate solutions over generations
//! using random mutation, pluggable recombination and elitist selection,
//! minimizing a scalar fitness distance to a target value.
//!
//! - **[`evolve`]**: the generic engine. Genotype/phenotype contracts,
//!   scan-and-replace elite selection, the generational loop, run
//!   configuration and a seeded runner.
//! - **[`seed`]**: the concrete inverse-hash problem. Finds a printable
//!   string whose Java `String.hashCode` equals a target `i32`.
//!
//! # Architecture
//!
//! The engine is single-threaded and consumes a caller-provided
//! [`rand::Rng`]; it never seeds or owns a global generator. Errors are
//! precondition failures reported as [`EvolveError`] before any evolution
//! happens. Progress is emitted through the `log` facade.

pub mod error;
pub mod evolve;
pub mod seed;

pub use error::{EvolveError, Result};
