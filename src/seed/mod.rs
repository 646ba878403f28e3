//! Inverse string-hash search.
//!
//! Searches for a short printable string whose Java-style `String.hashCode`
//! equals a caller-supplied `i32` target. This is the concrete problem that
//! exercises the [`evolve`](crate::evolve) engine.
//!
//! - [`SeedGenotype`]: printable string of length `1..=CAP - 1` with a cached
//!   hash; fitness distance is `|hash - target|`
//! - [`SinglePointSplice`]: opt-in recombination policy
//! - [`BestFitnessReporter`]: per-generation best-fitness observer
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_evolve::evolve::{Population, Silent};
//! use u_evolve::seed::{java_hash, SeedGenotype};
//!
//! let target = java_hash(b"Hi");
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut population: Population<SeedGenotype> = Population::new(50, target, &mut rng).unwrap();
//! let outcome = population.run_for_generations(20, 5, &mut rng, &mut Silent).unwrap();
//! assert_eq!(population.individuals().len(), 50);
//! assert!(outcome.generations <= 20);
//! ```

mod genotype;
mod reporter;
mod splice;

pub use genotype::{
    flip_until_printable, is_printable, java_hash, random_printable, SeedGenotype,
    DEFAULT_CAPACITY,
};
pub use reporter::{BestFitnessReporter, GenerationBest};
pub use splice::SinglePointSplice;
