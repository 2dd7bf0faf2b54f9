//! Error type shared by the interval map, the selectors and the solver.
//!
//! Every variant is a logical or configuration error reported once at the
//! point of detection. Nothing here is transient or retried.

use crate::ga::SolverState;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// The fitness values cannot be turned into a selection wheel.
    #[error("Degenerate population: {reason}")]
    DegeneratePopulation { reason: String },

    /// A point lookup fell outside every registered interval.
    #[error("Point {point} is outside all registered intervals")]
    OutOfRange { point: String },

    /// A new interval partially overlaps an existing one.
    #[error("Interval [{start}, {end}) overlaps an existing interval")]
    OverlappingInterval { start: String, end: String },

    /// The interval bounds are reversed or not comparable.
    #[error("Invalid interval [{start}, {end})")]
    InvalidInterval { start: String, end: String },

    /// A step was requested from a solver in a terminal state.
    #[error("Iteration exhausted: solver is {state} after {steps} steps")]
    IterationExhausted { state: SolverState, steps: usize },

    #[error("Configuration Error: {0}")]
    InvalidConfiguration(String),
}

impl GaError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        GaError::DegeneratePopulation {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the terminal-state error.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GaError::IterationExhausted { .. })
    }
}

pub type GaResult<T> = Result<T, GaError>;
