//! Genetic-algorithm solver for the Traveling Salesman Problem.
//!
//! A population of candidate tours evolves over generations through
//! tournament selection, ordered crossover, swap mutation and elitism until
//! a short closed tour over a fixed set of points is found.
//!
//! - [`tsp`]: problem model — points, the city registry, tours, populations
//! - [`ga`]: the evolution engine, its configuration and the run loop
//! - [`random`]: seeded random sources for reproducible runs
//! - [`error`]: the error taxonomy shared by every operation
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GaRunner};
//! use tsp_ga::tsp::{CityRegistry, Point};
//!
//! let mut registry = CityRegistry::new();
//! for (x, y) in [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)] {
//!     registry.add(Point::new(x, y));
//! }
//!
//! let config = GaConfig::default().with_population_size(10).with_seed(1);
//! let result = GaRunner::run(&registry, &config).unwrap();
//! assert!((result.best_distance - 40.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{Result, TspError};
