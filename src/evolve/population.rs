//! The generational scheduler.
//!
//! [`Population`] owns a fixed-size ordered collection of individuals, the
//! target value, and the loop:
//! initialize → (evaluate → select elites → breed/replace) → repeat → stop.
//!
//! Each generation is built into a fresh `Vec` from immutable snapshots of
//! the previous generation's elites and then swapped in; no individual is
//! mutated in place.

use super::config::validate_breed_count;
use super::selection::scan_replace;
use super::types::{Crossover, FirstParent, GenerationObserver, Genotype, Phenotype};
use crate::error::{EvolveError, Result};
use log::{debug, info};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a call to one of the run methods ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of generations bred by this call.
    pub generations: u64,

    /// Whether the population holds an optimal individual.
    pub optimal: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// A fixed-size population evolving toward `target`.
///
/// `X` is the recombination policy used when breeding; the default
/// [`FirstParent`] derives every offspring from its first parent alone.
#[derive(Debug, Clone)]
pub struct Population<G: Genotype, X = FirstParent> {
    individuals: Vec<Phenotype<G>>,
    target: G::Target,
    count: usize,
    crossover: X,
    generation: u64,
}

impl<G: Genotype> Population<G, FirstParent> {
    /// Builds `count` independently randomized individuals (generation 0).
    pub fn new<R: Rng>(count: usize, target: G::Target, rng: &mut R) -> Result<Self> {
        Self::with_crossover(count, target, FirstParent, rng)
    }
}

impl<G: Genotype, X: Crossover<G>> Population<G, X> {
    /// Builds `count` independently randomized individuals that will breed
    /// through `crossover`.
    pub fn with_crossover<R: Rng>(
        count: usize,
        target: G::Target,
        crossover: X,
        rng: &mut R,
    ) -> Result<Self> {
        if count == 0 {
            return Err(EvolveError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        let individuals = (0..count).map(|_| Phenotype::random(rng)).collect();
        Ok(Self {
            individuals,
            target,
            count,
            crossover,
            generation: 0,
        })
    }

    /// Wraps an existing ordered set of individuals as generation 0.
    pub fn from_individuals(
        individuals: Vec<Phenotype<G>>,
        target: G::Target,
        crossover: X,
    ) -> Result<Self> {
        if individuals.is_empty() {
            return Err(EvolveError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        Ok(Self {
            count: individuals.len(),
            individuals,
            target,
            crossover,
            generation: 0,
        })
    }

    pub fn count(&self) -> usize {
        debug_assert_eq!(self.count, self.individuals.len());
        self.count
    }

    pub fn individuals(&self) -> &[Phenotype<G>] {
        &self.individuals
    }

    pub fn target(&self) -> G::Target {
        self.target
    }

    /// Index of the current generation (0 before any breeding).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The first individual no other individual is strictly fitter than.
    pub fn best(&self) -> &Phenotype<G> {
        let mut best = &self.individuals[0];
        for ind in &self.individuals[1..] {
            if ind.is_fitter_than(best, self.target) {
                best = ind;
            }
        }
        best
    }

    /// Whether any individual has zero fitness distance.
    pub fn has_optimal(&self) -> bool {
        self.individuals
            .iter()
            .any(|ind| ind.is_optimal_fitness(self.target))
    }

    /// Selects `k` elites by scan-and-replace (see [`scan_replace`]).
    ///
    /// # Panics
    /// Panics if `k` exceeds the population size.
    pub fn get_best(&self, k: usize) -> Vec<Phenotype<G>> {
        let target = self.target;
        scan_replace(&self.individuals, k, |a, b| a.is_fitter_than(b, target))
    }

    /// Breeds and swaps in exactly one new generation.
    pub fn do_gen<R: Rng>(&mut self, breed_count: usize, rng: &mut R) -> Result<()> {
        validate_breed_count(self.count, breed_count)?;
        self.breed(breed_count, rng);
        Ok(())
    }

    /// Runs up to `gens` generations, stopping early once any individual is
    /// optimal.
    pub fn run_for_generations<R, O>(
        &mut self,
        gens: u64,
        breed_count: usize,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<RunOutcome>
    where
        R: Rng,
        O: GenerationObserver<G>,
    {
        if gens == 0 {
            return Err(EvolveError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        self.evolve(Some(gens), breed_count, rng, observer, None)
    }

    /// Runs until an optimal individual appears. There is no generation cap.
    pub fn run<R, O>(&mut self, breed_count: usize, rng: &mut R, observer: &mut O) -> Result<RunOutcome>
    where
        R: Rng,
        O: GenerationObserver<G>,
    {
        self.evolve(None, breed_count, rng, observer, None)
    }

    /// Like [`run`](Self::run) or [`run_for_generations`](Self::run_for_generations),
    /// with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// at the next generation boundary.
    pub fn run_with_cancel<R, O>(
        &mut self,
        gens: Option<u64>,
        breed_count: usize,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunOutcome>
    where
        R: Rng,
        O: GenerationObserver<G>,
    {
        if gens == Some(0) {
            return Err(EvolveError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        self.evolve(gens, breed_count, rng, observer, cancel)
    }

    fn evolve<R, O>(
        &mut self,
        gens: Option<u64>,
        breed_count: usize,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunOutcome>
    where
        R: Rng,
        O: GenerationObserver<G>,
    {
        validate_breed_count(self.count, breed_count)?;

        // Reported indices restart at 0 for every run call.
        observer.on_generation(0, &self.individuals, self.target);

        let mut bred = 0u64;
        let mut cancelled = false;

        loop {
            if self.has_optimal() {
                break;
            }
            if gens.is_some_and(|cap| bred >= cap) {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            self.breed(breed_count, rng);
            bred += 1;

            observer.on_generation(bred, &self.individuals, self.target);

            if log::log_enabled!(log::Level::Debug) {
                debug!(
                    "generation {}: best distance {}",
                    bred,
                    self.best().fitness_distance(self.target)
                );
            }
        }

        let optimal = self.has_optimal();
        info!(
            "stopped after {} generation(s): optimal={}, cancelled={}, best distance {}",
            bred,
            optimal,
            cancelled,
            self.best().fitness_distance(self.target)
        );

        Ok(RunOutcome {
            generations: bred,
            optimal,
            cancelled,
        })
    }

    /// Offspring `j` is bred from shortlist entries `j % k` and `(j + 1) % k`;
    /// the `k` elites are then appended unchanged.
    fn breed<R: Rng>(&mut self, breed_count: usize, rng: &mut R) {
        let shortlist = self.get_best(breed_count);
        assert_eq!(shortlist.len(), breed_count);

        let mut next_gen: Vec<Phenotype<G>> = Vec::with_capacity(self.count);

        for j in 0..(self.count - breed_count) {
            let parent1 = &shortlist[j % breed_count];
            let parent2 = &shortlist[(j + 1) % breed_count];
            next_gen.push(Phenotype::bred_from(parent1, parent2, &self.crossover, rng));
        }

        next_gen.extend(shortlist);
        assert_eq!(next_gen.len(), self.count);

        self.individuals = next_gen;
        self.generation += 1;
    }
}
