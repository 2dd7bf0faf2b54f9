//! Genetic Algorithm solver.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions. Users
//! define their problem by implementing [`GaProblem`] (or wrapping closures
//! in [`FnProblem`]), which specifies how to evaluate, mutate and cross over
//! individuals. The solver evolves a population until some individual's
//! fitness equals a target value.
//!
//! # Core Traits
//!
//! - [`GaProblem`]: evaluation and genetic operators
//! - [`Fitness`]: numeric fitness values (higher is better)
//! - [`Selector`]: parent selection plug point
//!
//! # Key Types
//!
//! - [`GaConfig`]: target value, mutation probability, seed, step cap
//! - [`GaSolver`]: the generational loop, usable as an [`Iterator`]
//! - [`RangeMap`]: half-open interval map backing the roulette wheel
//! - [`FitnessMap`]: individual-to-fitness mapping fed to selectors
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness_map;
mod fn_problem;
mod range_map;
mod selection;
mod solver;
mod types;

pub use config::GaConfig;
pub use fitness_map::FitnessMap;
pub use fn_problem::FnProblem;
pub use range_map::RangeMap;
pub use selection::{
    bernoulli_select, bernoulli_selection, build_roulette, roulette_draw, roulette_selection,
    Selection, Selector,
};
pub use solver::{GaSolver, RunSummary, SolverState, StepOutcome, StepReport};
pub use types::{Fitness, GaProblem};
