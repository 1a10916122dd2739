//! One-generation evolution step.
//!
//! [`GeneticAlgorithm`] turns a population into the next one:
//! elitism → tournament selection → ordered crossover → swap mutation.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::tournament;
use crate::error::Result;
use crate::tsp::{CityRegistry, Population, Tour};
use rand::Rng;
use tracing::trace;

/// The evolution engine.
///
/// Holds the operator parameters, fixed for the lifetime of the engine, and
/// a shared borrow of the problem instance. It keeps no state between
/// generations: [`evolve_population`](Self::evolve_population) is a function
/// of the engine, the input population and the random stream.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GeneticAlgorithm};
/// use tsp_ga::random::create_rng;
/// use tsp_ga::tsp::{CityRegistry, Population};
///
/// let registry = CityRegistry::classic();
/// let mut rng = create_rng(42);
/// let engine = GeneticAlgorithm::new(&registry, &GaConfig::default()).unwrap();
///
/// let mut population = Population::random(&registry, 50, &mut rng);
/// for _ in 0..100 {
///     population = engine.evolve_population(&population, &mut rng).unwrap();
/// }
/// let best = population.get_fittest().unwrap();
/// assert!(best.length().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<'a> {
    registry: &'a CityRegistry,
    mutation_rate: f64,
    tournament_size: usize,
    elitism: bool,
}

impl<'a> GeneticAlgorithm<'a> {
    /// Creates an engine from a validated configuration.
    pub fn new(registry: &'a CityRegistry, config: &GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
            elitism: config.elitism,
        })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Produces the next generation from `population`.
    ///
    /// The input is only read. With elitism, slot 0 of the result is a copy
    /// of the input's fittest tour and is exempt from mutation.
    pub fn evolve_population<R: Rng>(
        &self,
        population: &Population<'a>,
        rng: &mut R,
    ) -> Result<Population<'a>> {
        let size = population.len();
        let mut next = Population::empty(self.registry, size);

        let offset = if self.elitism && size > 0 {
            next.save(0, population.get_fittest()?.clone())?;
            1
        } else {
            0
        };

        for i in offset..size {
            let parent1 = self.tournament_selection(population, rng)?;
            let parent2 = self.tournament_selection(population, rng)?;
            let child = self.crossover(parent1, parent2, rng)?;
            next.save(i, child)?;
        }

        for i in offset..size {
            self.mutate(next.get_mut(i)?, rng)?;
        }

        trace!(size, offset, "generation evolved");
        Ok(next)
    }

    /// Picks a parent by tournament over `population`.
    pub fn tournament_selection<'p, R: Rng>(
        &self,
        population: &'p Population<'a>,
        rng: &mut R,
    ) -> Result<&'p Tour<'a>> {
        tournament(population, self.tournament_size, rng)
    }

    /// Ordered crossover of two parents into one child.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Tour<'a>,
        parent2: &Tour<'a>,
        rng: &mut R,
    ) -> Result<Tour<'a>> {
        order_crossover(parent1, parent2, rng)
    }

    /// Swap-mutates `tour` in place at this engine's rate.
    pub fn mutate<R: Rng>(&self, tour: &mut Tour<'a>, rng: &mut R) -> Result<()> {
        swap_mutation(tour, self.mutation_rate, rng)
    }
}
