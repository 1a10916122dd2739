//! Permutation operators on [`Tour`]s.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985) — keeps a window of parent1 in
//!   place and fills the rest in parent2's relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position reciprocal exchange
//!
//! Both operators map permutations to permutations: a complete parent pair
//! always yields a complete child, and mutation only ever swaps slots.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::{Result, TspError};
use crate::tsp::Tour;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// Two cut points are drawn independently and uniformly from `0..n`, then
/// the child is built by [`order_crossover_with_cuts`].
///
/// # Complexity
/// O(n²) time due to the `contains_city` scans, O(n) space
pub fn order_crossover<'a, R: Rng>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    rng: &mut R,
) -> Result<Tour<'a>> {
    let n = parent1.len();
    if n == 0 {
        return order_crossover_with_cuts(parent1, parent2, 0, 0);
    }
    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_with_cuts(parent1, parent2, start, end)
}

/// Deterministic core of [`order_crossover`].
///
/// 1. Copy a window of `parent1` into the child at the same positions:
///    - `start < end`: positions strictly between the cuts
///    - `start > end`: every position except those strictly between `end`
///      and `start`
///    - `start == end`: nothing
/// 2. Walk `parent2` in order; each city not yet in the child goes into the
///    leftmost empty slot.
pub fn order_crossover_with_cuts<'a>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    start: usize,
    end: usize,
) -> Result<Tour<'a>> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(TspError::SizeMismatch {
            expected: n,
            got: parent2.len(),
        });
    }
    let mut child = Tour::empty(parent1.registry());
    if n == 0 {
        return Ok(child);
    }
    for cut in [start, end] {
        if cut >= n {
            return Err(TspError::IndexOutOfRange { index: cut, len: n });
        }
    }

    // Step 1: window from parent1
    for i in 0..n {
        if in_window(i, start, end) {
            child.set(i, city_at(parent1, i)?)?;
        }
    }

    // Step 2: fill from parent2, leftmost empty slot first
    let mut cursor = 0;
    for i in 0..n {
        let city = city_at(parent2, i)?;
        if child.contains_city(city) {
            continue;
        }
        while cursor < n && child.get(cursor)?.is_some() {
            cursor += 1;
        }
        if cursor == n {
            break;
        }
        child.set(cursor, city)?;
    }

    Ok(child)
}

fn in_window(i: usize, start: usize, end: usize) -> bool {
    if start < end {
        start < i && i < end
    } else if start > end {
        !(end < i && i < start)
    } else {
        false
    }
}

fn city_at(tour: &Tour<'_>, position: usize) -> Result<usize> {
    tour.get(position)?
        .ok_or(TspError::UnassignedSlot { position })
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: each position, with probability `rate`, exchanges its city
/// with a uniformly drawn position (possibly itself).
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut Tour<'_>, rate: f64, rng: &mut R) -> Result<()> {
    let n = tour.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
