//! Domain-agnostic genetic algorithm solver.
//!
//! Given an initial population, a fitness ("goal") function and caller
//! supplied mutation and crossover operators, [`ga::GaSolver`] evolves the
//! population generation by generation until some individual's fitness
//! equals a target value, or a step cap runs out.
//!
//! - [`ga`]: the solver, roulette-wheel selection and supporting types
//! - [`random`]: seeded generator construction
//! - [`error`]: the crate error type
//!
//! # Architecture
//!
//! The crate contains no domain concepts. Individuals are opaque values;
//! everything problem-specific is injected through [`ga::GaProblem`].
//! Execution is single-threaded and synchronous: each step runs to
//! completion, and cancellation is expressed only through `max_steps`.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, GaResult};
