//! Problem model for the Traveling Salesman Problem.
//!
//! - [`Point`]: a city coordinate with Euclidean distance
//! - [`CityRegistry`]: the ordered set of cities defining an instance
//! - [`Tour`]: a closed visiting sequence with cached length and fitness
//! - [`Population`]: a fixed-size collection of tours
//!
//! Cities are referred to by their stable registry index. Tours and
//! populations borrow the registry they were built from, so the lifetime
//! `'a` on [`Tour<'a>`] and [`Population<'a>`] is the lifetime of the
//! problem instance.

mod point;
mod population;
mod registry;
mod tour;

pub use point::Point;
pub use population::Population;
pub use registry::CityRegistry;
pub use tour::Tour;

pub(crate) use population::fittest_of;
