//! Core trait definitions for the evolutionary engine.
//!
//! [`Genotype`] is the contract between the generic engine and a concrete
//! problem encoding. [`Phenotype`] wraps exactly one genotype and exposes
//! fitness comparison against a target. [`Crossover`] is the recombination
//! seam and [`GenerationObserver`] receives one call per generation.

use rand::Rng;
use std::borrow::Cow;
use std::fmt::Debug;

/// The raw, mutable encoding of one candidate solution.
///
/// Fitness is a distance to a target value: lower is better, zero is
/// optimal. Implementations must keep any cached fitness-relevant state
/// consistent with the representation before returning from
/// [`random`](Genotype::random) or [`mutate_from`](Genotype::mutate_from).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct Bits(u32);
///
/// impl Genotype for Bits {
///     type Target = u32;
///     fn random<R: Rng>(rng: &mut R) -> Self { Bits(rng.random()) }
///     fn mutate_from<R: Rng>(parent: &Self, rng: &mut R) -> Self {
///         Bits(parent.0 ^ (1 << rng.random_range(0..32)))
///     }
///     fn fitness_distance(&self, target: u32) -> u64 {
///         (self.0 ^ target).count_ones() as u64
///     }
/// }
/// ```
pub trait Genotype: Clone + Debug {
    /// The type of the target value fitness is measured against.
    type Target: Copy + Debug;

    /// Creates a uniformly random instance satisfying the representation
    /// invariants.
    ///
    /// Must be deterministic for a given RNG stream.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// Derives a new instance from `parent` by mutation.
    fn mutate_from<R: Rng>(parent: &Self, rng: &mut R) -> Self;

    /// Distance between this genotype's fitness value and `target`.
    fn fitness_distance(&self, target: Self::Target) -> u64;

    /// Derives a new instance from two parents: recombination through
    /// `crossover`, then mutation of the recombined genotype.
    fn derive_from_parents<X: Crossover<Self>, R: Rng>(
        parent1: &Self,
        parent2: &Self,
        crossover: &X,
        rng: &mut R,
    ) -> Self {
        let recombined = crossover.recombine(parent1, parent2, rng);
        Self::mutate_from(&recombined, rng)
    }
}

/// Recombination policy applied before mutation when breeding offspring.
pub trait Crossover<G: Genotype> {
    /// Combines two parents into one genotype.
    ///
    /// May borrow a parent unchanged instead of allocating.
    fn recombine<'a, R: Rng>(&self, parent1: &'a G, parent2: &'a G, rng: &mut R) -> Cow<'a, G>;
}

/// Single-parent policy: offspring derive from `parent1` alone.
///
/// `parent2` is ignored and no randomness is consumed, so breeding reduces
/// to plain mutation of the first parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstParent;

impl<G: Genotype> Crossover<G> for FirstParent {
    fn recombine<'a, R: Rng>(&self, parent1: &'a G, _parent2: &'a G, _rng: &mut R) -> Cow<'a, G> {
        Cow::Borrowed(parent1)
    }
}

/// An individual in the population: exactly one owned genotype.
///
/// Cloning a phenotype copies its genotype by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phenotype<G> {
    genotype: G,
}

impl<G: Genotype> Phenotype<G> {
    /// Creates a randomized individual.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            genotype: G::random(rng),
        }
    }

    /// Breeds a new individual from two parents.
    pub fn bred_from<X: Crossover<G>, R: Rng>(
        parent1: &Self,
        parent2: &Self,
        crossover: &X,
        rng: &mut R,
    ) -> Self {
        Self {
            genotype: G::derive_from_parents(&parent1.genotype, &parent2.genotype, crossover, rng),
        }
    }

    /// Returns `true` iff this individual is strictly closer to `target`
    /// than `other`. Ties are not fitter.
    pub fn is_fitter_than(&self, other: &Self, target: G::Target) -> bool {
        self.fitness_distance(target) < other.fitness_distance(target)
    }

    /// Returns `true` iff the fitness distance to `target` is zero.
    pub fn is_optimal_fitness(&self, target: G::Target) -> bool {
        self.fitness_distance(target) == 0
    }

    /// Distance of the wrapped genotype from `target`; 0 is optimal.
    pub fn fitness_distance(&self, target: G::Target) -> u64 {
        self.genotype.fitness_distance(target)
    }

    /// Borrows the wrapped genotype.
    pub fn genotype(&self) -> &G {
        &self.genotype
    }

    /// Unwraps the genotype.
    pub fn into_genotype(self) -> G {
        self.genotype
    }
}

impl<G> From<G> for Phenotype<G> {
    fn from(genotype: G) -> Self {
        Self { genotype }
    }
}

/// Receives the population once per generation boundary.
///
/// Reporting only: nothing returned here influences the loop.
/// Any `FnMut(u64, &[Phenotype<G>], G::Target)` closure is an observer.
pub trait GenerationObserver<G: Genotype> {
    fn on_generation(&mut self, generation: u64, individuals: &[Phenotype<G>], target: G::Target);
}

impl<G, F> GenerationObserver<G> for F
where
    G: Genotype,
    F: FnMut(u64, &[Phenotype<G>], G::Target),
{
    fn on_generation(&mut self, generation: u64, individuals: &[Phenotype<G>], target: G::Target) {
        self(generation, individuals, target)
    }
}

/// Observer that ignores every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<G: Genotype> GenerationObserver<G> for Silent {
    fn on_generation(&mut self, _generation: u64, _individuals: &[Phenotype<G>], _target: G::Target) {}
}
