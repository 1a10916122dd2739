//! Parent selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{Result, TspError};
use crate::tsp::{fittest_of, Population, Tour};
use rand::Rng;

/// Tournament selection: sample `k` tours uniformly with replacement and
/// return the fittest of the sample.
///
/// Higher `k` = stronger selection pressure. Ties between sampled tours go
/// to the later draw, matching [`Population::get_fittest`].
///
/// # Complexity
/// O(k) per selection
pub fn tournament<'p, 'a, R: Rng>(
    population: &'p Population<'a>,
    k: usize,
    rng: &mut R,
) -> Result<&'p Tour<'a>> {
    let n = population.len();
    if n == 0 {
        return Err(TspError::EmptyPopulation);
    }
    let entrants = (0..k.max(1))
        .map(|_| population.get(rng.random_range(0..n)))
        .collect::<Result<Vec<_>>>()?;
    fittest_of(entrants)
}
