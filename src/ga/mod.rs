//! Genetic Algorithm for the TSP.
//!
//! Evolves a [`Population`](crate::tsp::Population) of tours generation by
//! generation. Each generation optionally carries the previous fittest tour
//! over unchanged (elitism), fills the remaining slots with ordered-crossover
//! children of tournament-selected parents, then swap-mutates every child.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism)
//! - [`GeneticAlgorithm`]: One-generation evolution step
//! - [`GaRunner`]: Executes the generation loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover (OX) and swap mutation on tours
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use engine::GeneticAlgorithm;
pub use runner::{GaResult, GaRunner};
