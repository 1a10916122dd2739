//! The set of cities defining a problem instance.

use super::point::Point;
use crate::error::{Result, TspError};
use rand::Rng;

/// Upper bound (exclusive) of coordinates produced by [`CityRegistry::random`].
const RANDOM_COORDINATE_BOUND: u32 = 200;

/// Ordered, append-only collection of cities.
///
/// Cities are identified by their insertion index. Once the instance is
/// assembled the registry is only ever borrowed immutably: every
/// [`Tour`](super::Tour) and [`Population`](super::Population) holds a
/// `&CityRegistry`, so separate instances never share state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityRegistry {
    cities: Vec<Point>,
}

impl CityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates `count` cities with integer coordinates in `[0, 200)`.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Self {
        (0..count)
            .map(|_| {
                let x = rng.random_range(0..RANDOM_COORDINATE_BOUND);
                let y = rng.random_range(0..RANDOM_COORDINATE_BOUND);
                Point::new(x as f64, y as f64)
            })
            .collect()
    }

    /// The 20-city demonstration instance.
    pub fn classic() -> Self {
        [
            (60.0, 200.0),
            (180.0, 200.0),
            (80.0, 180.0),
            (140.0, 180.0),
            (20.0, 160.0),
            (100.0, 160.0),
            (200.0, 160.0),
            (140.0, 140.0),
            (40.0, 120.0),
            (100.0, 120.0),
            (180.0, 100.0),
            (60.0, 80.0),
            (120.0, 80.0),
            (180.0, 60.0),
            (20.0, 40.0),
            (100.0, 40.0),
            (200.0, 40.0),
            (20.0, 20.0),
            (60.0, 20.0),
            (160.0, 20.0),
        ]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect()
    }

    /// Appends a city. Duplicates are accepted.
    pub fn add(&mut self, point: Point) {
        self.cities.push(point);
    }

    /// Returns the city at `index`.
    pub fn get(&self, index: usize) -> Result<Point> {
        self.cities
            .get(index)
            .copied()
            .ok_or(TspError::IndexOutOfRange {
                index,
                len: self.cities.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.cities.iter()
    }

    /// Distance between the cities at indices `a` and `b`.
    pub(crate) fn distance(&self, a: usize, b: usize) -> Result<f64> {
        Ok(self.get(a)?.distance(&self.get(b)?))
    }
}

impl FromIterator<Point> for CityRegistry {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            cities: iter.into_iter().collect(),
        }
    }
}
