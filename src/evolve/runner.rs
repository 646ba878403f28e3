//! Configured evolutionary runs.
//!
//! [`EvolveRunner`] owns the RNG lifecycle the [`Population`] deliberately
//! does not: it validates an [`EvolveConfig`], seeds the generator, builds
//! the population and drives it bounded or unbounded.

use super::config::EvolveConfig;
use super::population::Population;
use super::types::{Crossover, FirstParent, GenerationObserver, Genotype, Phenotype};
use crate::error::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolveResult<G: Genotype> {
    /// The fittest individual of the final generation.
    pub best: Phenotype<G>,

    /// Fitness distance of `best` to the target.
    pub best_distance: u64,

    /// Number of generations bred.
    pub generations: u64,

    /// Whether an optimal individual was found.
    pub optimal: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Seed the generator was created from.
    pub seed: u64,
}

/// Executes a configured run.
///
/// # Usage
///
/// ```ignore
/// let config = EvolveConfig::new(500, 20).with_max_generations(10_000).with_seed(42);
/// let result = EvolveRunner::run::<SeedGenotype, _>(&config, 2_112_454_520, &mut Silent)?;
/// println!("{} after {} generations", result.best.genotype(), result.generations);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs with single-parent breeding.
    pub fn run<G, O>(config: &EvolveConfig, target: G::Target, observer: &mut O) -> Result<EvolveResult<G>>
    where
        G: Genotype,
        O: GenerationObserver<G>,
    {
        Self::run_with_cancel(config, target, FirstParent, observer, None)
    }

    /// Runs with an explicit crossover policy and an optional cancellation
    /// token.
    pub fn run_with_cancel<G, X, O>(
        config: &EvolveConfig,
        target: G::Target,
        crossover: X,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolveResult<G>>
    where
        G: Genotype,
        X: Crossover<G>,
        O: GenerationObserver<G>,
    {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!(
            "evolving {} individuals ({} elites) toward {:?}, seed {}",
            config.population_size, config.breed_count, target, seed
        );

        let mut population =
            Population::with_crossover(config.population_size, target, crossover, &mut rng)?;
        let outcome = population.run_with_cancel(
            config.max_generations,
            config.breed_count,
            &mut rng,
            observer,
            cancel,
        )?;

        let best = population.best().clone();
        Ok(EvolveResult {
            best_distance: best.fitness_distance(target),
            best,
            generations: outcome.generations,
            optimal: outcome.optimal,
            cancelled: outcome.cancelled,
            seed,
        })
    }
}
