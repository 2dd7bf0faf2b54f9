//! GA solver configuration.
//!
//! [`GaConfig`] holds the target, operator rates and termination settings
//! of a [`GaSolver`](super::GaSolver) run.

use super::selection::Selection;
use crate::error::{GaError, GaResult};

/// Configuration for the GA solver.
///
/// # Defaults
///
/// ```
/// use ga_solver::ga::GaConfig;
///
/// let config = GaConfig::new(0);
/// assert_eq!(config.target_value, 0);
/// assert!((config.prob_mutation - 0.1).abs() < 1e-12);
/// assert_eq!(config.max_steps, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ga_solver::ga::{GaConfig, Selection};
///
/// let config = GaConfig::new(0.0)
///     .with_prob_mutation(0.7)
///     .with_seed(42)
///     .with_max_steps(20)
///     .with_selection_rate(0.5)
///     .with_selection(Selection::Roulette);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig<F> {
    /// Fitness value that marks a solution. Compared by exact equality.
    pub target_value: F,

    /// Probability (0.0–1.0) that a mutation call actually mutates.
    pub prob_mutation: f64,

    /// Seed applied before every probabilistic operation.
    ///
    /// `None` lets the solver's generator run as a single unseeded stream.
    pub random_seed: Option<u64>,

    /// Maximum number of evolved generations. `None` means unbounded.
    pub max_steps: Option<usize>,

    /// Fraction of the population drawn as parents each generation, in
    /// `(0, 1]`. Crossover always rebuilds the full population size.
    pub selection_rate: f64,

    /// Selection strategy used by [`GaSolver::new`](super::GaSolver::new).
    pub selection: Selection,
}

impl<F> GaConfig<F> {
    /// Creates a configuration searching for `target_value`.
    pub fn new(target_value: F) -> Self {
        Self {
            target_value,
            prob_mutation: 0.1,
            random_seed: None,
            max_steps: None,
            selection_rate: 1.0,
            selection: Selection::default(),
        }
    }

    /// Sets the mutation probability.
    pub fn with_prob_mutation(mut self, p: f64) -> Self {
        self.prob_mutation = p;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the step cap.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Sets the selection rate.
    pub fn with_selection_rate(mut self, rate: f64) -> Self {
        self.selection_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Number of parents drawn from a population of `population_size`.
    ///
    /// Rounds up and never returns zero for a non-empty population.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn selection_count(&self, population_size: usize) -> usize {
        let n = (population_size as f64 * self.selection_rate).ceil() as usize;
        n.clamp(1, population_size.max(1))
    }

    /// Validates the configuration.
    ///
    /// Rates are not clamped: an out-of-range value is an error.
    pub fn validate(&self) -> GaResult<()> {
        if !(0.0..=1.0).contains(&self.prob_mutation) {
            return Err(GaError::InvalidConfiguration(format!(
                "prob_mutation must be within [0, 1], got {}",
                self.prob_mutation
            )));
        }
        if !(self.selection_rate > 0.0 && self.selection_rate <= 1.0) {
            return Err(GaError::InvalidConfiguration(format!(
                "selection_rate must be within (0, 1], got {}",
                self.selection_rate
            )));
        }
        if self.max_steps == Some(0) {
            return Err(GaError::InvalidConfiguration(
                "max_steps must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
