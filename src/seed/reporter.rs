//! Best-of-generation reporting for the seed search.

use super::genotype::SeedGenotype;
use crate::evolve::{GenerationObserver, Phenotype};
use log::info;
use std::fmt;

/// The fittest individual of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationBest {
    /// Generation index as reported by the run.
    pub generation: u64,
    /// Fitness distance of the best individual.
    pub distance: u64,
    /// The best individual's string.
    pub value: String,
}

impl fmt::Display for GenerationBest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[G{}]\t| BEST = {}\t| \"{}\"",
            self.generation, self.distance, self.value
        )
    }
}

/// Observer that tracks the fittest individual per generation and the best
/// one seen over the whole run.
///
/// Within a generation the first individual no later one strictly beats is
/// reported, so ties resolve to the lowest index.
#[derive(Debug, Clone, Default)]
pub struct BestFitnessReporter {
    latest: Option<GenerationBest>,
    best_seen: Option<GenerationBest>,
    history: Vec<u64>,
}

impl BestFitnessReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best individual of the most recent generation.
    pub fn latest(&self) -> Option<&GenerationBest> {
        self.latest.as_ref()
    }

    /// Best individual over every generation reported so far; the earliest
    /// wins ties.
    pub fn best_seen(&self) -> Option<&GenerationBest> {
        self.best_seen.as_ref()
    }

    /// Best distance per generation, indexed by report order.
    pub fn history(&self) -> &[u64] {
        &self.history
    }
}

impl<const CAP: usize> GenerationObserver<SeedGenotype<CAP>> for BestFitnessReporter {
    fn on_generation(
        &mut self,
        generation: u64,
        individuals: &[Phenotype<SeedGenotype<CAP>>],
        target: i32,
    ) {
        let Some(first) = individuals.first() else {
            return;
        };
        let mut best = first;
        for ind in &individuals[1..] {
            if ind.is_fitter_than(best, target) {
                best = ind;
            }
        }

        let report = GenerationBest {
            generation,
            distance: best.fitness_distance(target),
            value: best.genotype().to_string(),
        };
        info!("{report}");

        self.history.push(report.distance);
        let improved = match &self.best_seen {
            Some(seen) => report.distance < seen.distance,
            None => true,
        };
        if improved {
            self.best_seen = Some(report.clone());
        }
        self.latest = Some(report);
    }
}
