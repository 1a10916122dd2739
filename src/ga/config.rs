//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, TspError};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 5);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(7)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of generations the runner evolves.
    pub max_generations: usize,

    /// Per-position probability of triggering a swap during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of tours sampled, with replacement, per tournament.
    ///
    /// May exceed `population_size`: sampling with replacement keeps the
    /// tournament well defined, it just concentrates on fewer distinct tours.
    pub tournament_size: usize,

    /// Whether slot 0 of each new generation carries the previous fittest tour.
    pub elitism: bool,

    /// Number of generations without strict improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.015,
            tournament_size: 5,
            elitism: true,
            stagnation_limit: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(TspError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(TspError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
