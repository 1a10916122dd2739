//! Fixed-size collections of tours.

use super::registry::CityRegistry;
use super::tour::Tour;
use crate::error::{Result, TspError};
use rand::Rng;

/// A fixed-size, ordered collection of tour slots.
///
/// The size never changes after construction. Slots start empty in
/// [`Population::empty`] and are filled one by one through
/// [`save`](Self::save); [`Population::random`] fills them all eagerly.
#[derive(Debug, Clone)]
pub struct Population<'a> {
    registry: &'a CityRegistry,
    tours: Vec<Option<Tour<'a>>>,
}

impl<'a> Population<'a> {
    /// Creates a population of `size` unassigned slots.
    pub fn empty(registry: &'a CityRegistry, size: usize) -> Self {
        Self {
            registry,
            tours: vec![None; size],
        }
    }

    /// Creates a population of `size` uniformly random tours.
    pub fn random<R: Rng>(registry: &'a CityRegistry, size: usize, rng: &mut R) -> Self {
        Self {
            registry,
            tours: (0..size)
                .map(|_| Some(Tour::random(registry, rng)))
                .collect(),
        }
    }

    pub fn registry(&self) -> &'a CityRegistry {
        self.registry
    }

    /// Stores `tour` in slot `index`, replacing whatever was there.
    ///
    /// The tour is not checked for being a permutation.
    pub fn save(&mut self, index: usize, tour: Tour<'a>) -> Result<()> {
        let len = self.tours.len();
        let slot = self
            .tours
            .get_mut(index)
            .ok_or(TspError::IndexOutOfRange { index, len })?;
        *slot = Some(tour);
        Ok(())
    }

    /// Contents of slot `index`, `None` while it is unassigned.
    pub fn slot(&self, index: usize) -> Result<Option<&Tour<'a>>> {
        self.tours
            .get(index)
            .map(Option::as_ref)
            .ok_or(TspError::IndexOutOfRange {
                index,
                len: self.tours.len(),
            })
    }

    /// The tour in slot `index`; an unassigned slot is an error.
    pub fn get(&self, index: usize) -> Result<&Tour<'a>> {
        self.slot(index)?
            .ok_or(TspError::UnassignedSlot { position: index })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Tour<'a>> {
        let len = self.tours.len();
        self.tours
            .get_mut(index)
            .ok_or(TspError::IndexOutOfRange { index, len })?
            .as_mut()
            .ok_or(TspError::UnassignedSlot { position: index })
    }

    /// The tour with the highest fitness.
    ///
    /// Ties go to the later slot. Every slot must be filled.
    pub fn get_fittest(&self) -> Result<&Tour<'a>> {
        let tours = self
            .tours
            .iter()
            .enumerate()
            .map(|(position, slot)| slot.as_ref().ok_or(TspError::UnassignedSlot { position }))
            .collect::<Result<Vec<_>>>()?;
        fittest_of(tours)
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Iterates over the filled slots.
    pub fn iter(&self) -> impl Iterator<Item = &Tour<'a>> {
        self.tours.iter().flatten()
    }
}

/// Linear scan for the fittest tour: a candidate replaces the current best
/// when `best.fitness <= candidate.fitness`, so ties favor later entries.
pub(crate) fn fittest_of<'p, 'a: 'p, I>(tours: I) -> Result<&'p Tour<'a>>
where
    I: IntoIterator<Item = &'p Tour<'a>>,
{
    let mut tours = tours.into_iter();
    let mut fittest = tours.next().ok_or(TspError::EmptyPopulation)?;
    let mut best = fittest.fitness()?;
    for tour in tours {
        let fitness = tour.fitness()?;
        if best <= fitness {
            fittest = tour;
            best = fitness;
        }
    }
    Ok(fittest)
}
