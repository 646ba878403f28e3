//! Run configuration.
//!
//! [`EvolveConfig`] holds the parameters that control the generational loop.

use crate::error::{EvolveError, Result};

/// Configuration for an evolutionary run.
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::evolve::EvolveConfig;
///
/// let config = EvolveConfig::new(200, 10)
///     .with_max_generations(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of individuals in the population. Fixed for the whole run.
    pub population_size: usize,

    /// Number of elites kept each generation; also the breeding shortlist.
    ///
    /// Must satisfy `2 <= breed_count < population_size`.
    pub breed_count: usize,

    /// Maximum number of generations.
    ///
    /// `None` runs until an optimal individual appears.
    pub max_generations: Option<u64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EvolveConfig {
    /// Creates an unbounded, unseeded configuration.
    pub fn new(population_size: usize, breed_count: usize) -> Self {
        Self {
            population_size,
            breed_count,
            max_generations: None,
            seed: None,
        }
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: u64) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_breed_count(self.population_size, self.breed_count)?;
        if self.max_generations == Some(0) {
            return Err(EvolveError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Checks `2 <= breed_count < population_size`.
pub(crate) fn validate_breed_count(population_size: usize, breed_count: usize) -> Result<()> {
    if breed_count < 2 {
        return Err(EvolveError::InvalidConfig(format!(
            "breed_count must be at least 2, got {breed_count}"
        )));
    }
    if breed_count >= population_size {
        return Err(EvolveError::InvalidConfig(format!(
            "breed_count ({breed_count}) must be less than population_size ({population_size})"
        )));
    }
    Ok(())
}
