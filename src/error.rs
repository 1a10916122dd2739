//! Error taxonomy for the TSP core and the GA engine.

use thiserror::Error;

/// Errors raised by the tour model, the population container and the
/// evolutionary operators.
///
/// None of these are retried internally: a failing generation aborts the
/// run and the error is handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// A registry, tour or population index outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A slot that must hold a value was still unassigned.
    #[error("slot {position} is unassigned")]
    UnassignedSlot { position: usize },

    /// Fitness was requested for a tour whose length is exactly zero.
    #[error("degenerate tour: length is zero, fitness is undefined")]
    DegenerateTour,

    #[error("population is empty")]
    EmptyPopulation,

    /// Two sequences that must agree in size do not.
    #[error("size mismatch: expected {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
