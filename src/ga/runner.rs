//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the whole run:
//! seed population → evolve → track best-so-far → repeat.

use super::config::GaConfig;
use super::engine::GeneticAlgorithm;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::tsp::{CityRegistry, Population, Tour};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a GA optimization run.
///
/// Contains the best tour found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<'a> {
    /// The best tour found during the entire run.
    pub best: Tour<'a>,

    /// Length of `best`.
    pub best_distance: f64,

    /// Best length in the randomly seeded initial population.
    pub initial_distance: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-so-far length: the initial population, then one entry per generation.
    pub distance_history: Vec<f64>,
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GaRunner};
/// use tsp_ga::tsp::CityRegistry;
///
/// let registry = CityRegistry::classic();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&registry, &config).unwrap();
/// assert!(result.best_distance <= result.initial_distance);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<'a>(registry: &'a CityRegistry, config: &GaConfig) -> Result<GaResult<'a>> {
        Self::run_with_cancel(registry, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best tour found so far.
    pub fn run_with_cancel<'a>(
        registry: &'a CityRegistry,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<'a>> {
        let engine = GeneticAlgorithm::new(registry, config)?;
        let mut rng = rng_from_seed(config.seed);

        info!(
            cities = registry.len(),
            population_size = config.population_size,
            max_generations = config.max_generations,
            seed = ?config.seed,
            "starting genetic algorithm"
        );

        // 1. Seed population
        let mut population = Population::random(registry, config.population_size, &mut rng);

        // 2. Track best
        let mut best = population.get_fittest()?.clone();
        let mut best_distance = best.length()?;
        let initial_distance = best_distance;
        info!(distance = initial_distance, "initial population");

        let mut distance_history = Vec::with_capacity(config.max_generations + 1);
        distance_history.push(best_distance);

        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!(generation = gen, "run cancelled");
                    cancelled = true;
                    break;
                }
            }

            population = engine.evolve_population(&population, &mut rng)?;
            generations = gen + 1;

            let gen_best = population.get_fittest()?;
            let gen_distance = gen_best.length()?;
            if gen_distance < best_distance {
                best = gen_best.clone();
                best_distance = gen_distance;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            distance_history.push(best_distance);
            debug!(
                generation = generations,
                generation_best = gen_distance,
                best = best_distance,
                "generation complete"
            );

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                warn!(
                    generation = generations,
                    limit = config.stagnation_limit,
                    "stopping: no improvement"
                );
                stagnated = true;
                break;
            }
        }

        info!(
            distance = best_distance,
            generations,
            improvement = initial_distance - best_distance,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best,
            best_distance,
            initial_distance,
            generations,
            stagnated,
            cancelled,
            distance_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
