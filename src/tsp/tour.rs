//! Candidate solutions: closed tours over the registry.

use super::point::Point;
use super::registry::CityRegistry;
use crate::error::{Result, TspError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::Cell;
use std::fmt;

/// An ordered visiting sequence over every city of a [`CityRegistry`],
/// implicitly closed back to the first city.
///
/// Slots hold registry indices. A freshly constructed [`Tour::empty`] has
/// every slot unassigned; operators fill it, after which the tour is a
/// permutation of `0..registry.len()`.
///
/// Length and fitness are computed lazily and cached. The caches are an
/// explicit unset/computed state (`None` / `Some`), so a legitimately
/// zero-length tour is cached like any other value. Every positional write
/// resets both.
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    registry: &'a CityRegistry,
    slots: Vec<Option<usize>>,
    length: Cell<Option<f64>>,
    fitness: Cell<Option<f64>>,
}

impl<'a> Tour<'a> {
    /// Creates a tour sized to the registry with every slot unassigned.
    pub fn empty(registry: &'a CityRegistry) -> Self {
        Self {
            registry,
            slots: vec![None; registry.len()],
            length: Cell::new(None),
            fitness: Cell::new(None),
        }
    }

    /// Creates a tour from an explicit city sequence.
    ///
    /// The sequence must have one entry per registry city and every entry
    /// must be a valid registry index. Duplicates are not rejected here.
    pub fn from_cities(registry: &'a CityRegistry, cities: Vec<usize>) -> Result<Self> {
        if cities.len() != registry.len() {
            return Err(TspError::SizeMismatch {
                expected: registry.len(),
                got: cities.len(),
            });
        }
        if let Some(&bad) = cities.iter().find(|&&c| c >= registry.len()) {
            return Err(TspError::IndexOutOfRange {
                index: bad,
                len: registry.len(),
            });
        }
        Ok(Self {
            registry,
            slots: cities.into_iter().map(Some).collect(),
            length: Cell::new(None),
            fitness: Cell::new(None),
        })
    }

    /// Creates a uniformly random permutation of the registry.
    pub fn random<R: Rng>(registry: &'a CityRegistry, rng: &mut R) -> Self {
        let mut tour = Self::empty(registry);
        tour.generate_random_permutation(rng);
        tour
    }

    /// Fills every slot with each registry city once, then shuffles.
    pub fn generate_random_permutation<R: Rng>(&mut self, rng: &mut R) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Some(i);
        }
        self.slots.shuffle(rng);
        self.invalidate();
    }

    /// The registry this tour permutes.
    pub fn registry(&self) -> &'a CityRegistry {
        self.registry
    }

    /// City index at `position`, or `None` if the slot is unassigned.
    pub fn get(&self, position: usize) -> Result<Option<usize>> {
        self.slots
            .get(position)
            .copied()
            .ok_or(TspError::IndexOutOfRange {
                index: position,
                len: self.slots.len(),
            })
    }

    /// Places `city` at `position`.
    pub fn set(&mut self, position: usize, city: usize) -> Result<()> {
        if city >= self.registry.len() {
            return Err(TspError::IndexOutOfRange {
                index: city,
                len: self.registry.len(),
            });
        }
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(TspError::IndexOutOfRange { index: position, len })?;
        *slot = Some(city);
        self.invalidate();
        Ok(())
    }

    /// Exchanges the contents of two positions.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.slots.len();
        for index in [a, b] {
            if index >= len {
                return Err(TspError::IndexOutOfRange { index, len });
            }
        }
        self.slots.swap(a, b);
        self.invalidate();
        Ok(())
    }

    /// Closed-loop tour length.
    ///
    /// Fails with [`TspError::UnassignedSlot`] if the tour is incomplete.
    pub fn length(&self) -> Result<f64> {
        if let Some(length) = self.length.get() {
            return Ok(length);
        }
        let n = self.slots.len();
        let mut total = 0.0;
        for i in 0..n {
            let from = self.assigned(i)?;
            let to = self.assigned((i + 1) % n)?;
            total += self.registry.distance(from, to)?;
        }
        self.length.set(Some(total));
        Ok(total)
    }

    /// Reciprocal of [`length`](Self::length). Higher is better.
    ///
    /// Fails with [`TspError::DegenerateTour`] when the length is zero.
    pub fn fitness(&self) -> Result<f64> {
        if let Some(fitness) = self.fitness.get() {
            return Ok(fitness);
        }
        let length = self.length()?;
        if length == 0.0 {
            return Err(TspError::DegenerateTour);
        }
        let fitness = 1.0 / length;
        self.fitness.set(Some(fitness));
        Ok(fitness)
    }

    /// Whether `city` occupies any slot. Unassigned slots never match.
    pub fn contains_city(&self, city: usize) -> bool {
        self.slots.iter().any(|&slot| slot == Some(city))
    }

    /// Number of slots, fixed at construction.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot is assigned.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Visiting order as registry indices.
    pub fn cities(&self) -> Result<Vec<usize>> {
        (0..self.slots.len()).map(|i| self.assigned(i)).collect()
    }

    /// Visiting order as coordinates.
    pub fn points(&self) -> Result<Vec<Point>> {
        (0..self.slots.len())
            .map(|i| self.registry.get(self.assigned(i)?))
            .collect()
    }

    fn assigned(&self, position: usize) -> Result<usize> {
        self.get(position)?
            .ok_or(TspError::UnassignedSlot { position })
    }

    fn invalidate(&self) {
        self.length.set(None);
        self.fitness.set(None);
    }
}

/// Two tours are equal when they visit the same cities in the same slots.
impl PartialEq for Tour<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl fmt::Display for Tour<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match slot.map(|c| self.registry.get(c)) {
                Some(Ok(point)) => write!(f, "[{point}]")?,
                _ => f.write_str("[-]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn square() -> CityRegistry {
        [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect()
    }

    fn is_valid_permutation(tour: &Tour<'_>) -> bool {
        let Ok(cities) = tour.cities() else {
            return false;
        };
        let set: HashSet<usize> = cities.iter().copied().collect();
        set.len() == tour.registry().len() && cities.iter().all(|&c| c < set.len())
    }

    #[test]
    fn test_empty_tour_is_unassigned() {
        let registry = square();
        let tour = Tour::empty(&registry);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_complete());
        assert_eq!(tour.get(2).unwrap(), None);
        assert_eq!(tour.length(), Err(TspError::UnassignedSlot { position: 0 }));
        assert!(!tour.contains_city(0));
    }

    #[test]
    fn test_square_perimeter() {
        let registry = square();
        let tour = Tour::from_cities(&registry, vec![0, 1, 2, 3]).unwrap();
        assert!((tour.length().unwrap() - 40.0).abs() < 1e-12);
        assert!((tour.fitness().unwrap() - 1.0 / 40.0).abs() < 1e-15);
    }

    #[test]
    fn test_crossing_tour_is_longer() {
        let registry = square();
        let tour = Tour::from_cities(&registry, vec![0, 2, 1, 3]).unwrap();
        let expected = 20.0 + 2.0 * 200f64.sqrt();
        assert!((tour.length().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_from_cities_validation() {
        let registry = square();
        assert_eq!(
            Tour::from_cities(&registry, vec![0, 1, 2]).unwrap_err(),
            TspError::SizeMismatch {
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            Tour::from_cities(&registry, vec![0, 1, 2, 9]).unwrap_err(),
            TspError::IndexOutOfRange { index: 9, len: 4 }
        );
    }

    #[test]
    fn test_set_invalidates_cache() {
        let registry = square();
        let mut tour = Tour::from_cities(&registry, vec![0, 1, 2, 3]).unwrap();
        assert!((tour.length().unwrap() - 40.0).abs() < 1e-12);

        tour.set(1, 2).unwrap();
        tour.set(2, 1).unwrap();
        assert!(tour.length().unwrap() > 40.0);

        tour.swap(1, 2).unwrap();
        assert!((tour.length().unwrap() - 40.0).abs() < 1e-12);
        assert!((tour.fitness().unwrap() - 1.0 / 40.0).abs() < 1e-15);
    }

    #[test]
    fn test_set_and_get_bounds() {
        let registry = square();
        let mut tour = Tour::empty(&registry);
        assert_eq!(
            tour.set(4, 0),
            Err(TspError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            tour.set(0, 4),
            Err(TspError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(tour.get(4).is_err());
        assert!(tour.swap(0, 4).is_err());

        tour.set(3, 1).unwrap();
        assert_eq!(tour.get(3).unwrap(), Some(1));
        assert!(tour.contains_city(1));
        assert!(!tour.contains_city(0));
    }

    #[test]
    fn test_random_permutation_is_valid() {
        let registry = CityRegistry::classic();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let tour = Tour::random(&registry, &mut rng);
            assert!(is_valid_permutation(&tour));
        }
    }

    #[test]
    fn test_random_permutation_varies() {
        let registry = CityRegistry::classic();
        let mut rng = create_rng(42);
        let a = Tour::random(&registry, &mut rng);
        let b = Tour::random(&registry, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_single_city_is_degenerate() {
        let registry: CityRegistry = [Point::new(5.0, 5.0)].into_iter().collect();
        let tour = Tour::random(&registry, &mut create_rng(1));
        assert_eq!(tour.length().unwrap(), 0.0);
        assert_eq!(tour.fitness(), Err(TspError::DegenerateTour));
    }

    #[test]
    fn test_coincident_cities_are_degenerate() {
        let registry: CityRegistry = [Point::new(1.0, 1.0), Point::new(1.0, 1.0)]
            .into_iter()
            .collect();
        let tour = Tour::from_cities(&registry, vec![1, 0]).unwrap();
        assert_eq!(tour.fitness(), Err(TspError::DegenerateTour));
    }

    #[test]
    fn test_points_and_display() {
        let registry = square();
        let tour = Tour::from_cities(&registry, vec![3, 0, 1, 2]).unwrap();
        assert_eq!(
            tour.points().unwrap(),
            vec![
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
            ]
        );
        assert_eq!(tour.to_string(), "[10, 0],[0, 0],[0, 10],[10, 10]");

        let mut partial = Tour::empty(&registry);
        partial.set(1, 2).unwrap();
        assert_eq!(partial.to_string(), "[-],[10, 10],[-],[-]");
    }
}
