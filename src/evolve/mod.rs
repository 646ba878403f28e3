//! Elitist generational evolutionary search.
//!
//! A generic engine built on trait-based abstractions. Users define a
//! problem encoding by implementing [`Genotype`]; the engine wraps each
//! genotype in a [`Phenotype`] and evolves a fixed-size [`Population`]
//! toward a target value.
//!
//! # Core Traits
//!
//! - [`Genotype`]: randomize, derive from parents, measure fitness distance
//! - [`Crossover`]: recombination seam applied before mutation
//! - [`GenerationObserver`]: per-generation reporting callback
//!
//! # Key Types
//!
//! - [`Population`]: fixed-size collection plus the generational loop
//! - [`EvolveConfig`]: population size, elite count, generation cap, seed
//! - [`EvolveRunner`]: seeds the RNG and drives a configured run
//!
//! # Generation Step
//!
//! 1. Select `k` elites by [`scan_replace`]
//! 2. Breed `count - k` offspring, offspring `j` from elites `j % k` and
//!    `(j + 1) % k`
//! 3. Append the `k` elites unchanged and swap in the new generation
//!
//! The loop stops as soon as any individual has zero fitness distance, or
//! when the generation cap (if any) is reached.

mod config;
mod population;
mod runner;
mod selection;
mod types;

pub use config::EvolveConfig;
pub use population::{Population, RunOutcome};
pub use runner::{EvolveResult, EvolveRunner};
pub use selection::scan_replace;
pub use types::{Crossover, FirstParent, GenerationObserver, Genotype, Phenotype, Silent};
