//! Generational GA loop.
//!
//! [`GaSolver`] owns the population and advances it one generation per
//! [`step`](GaSolver::step): evaluate → check target → check step cap →
//! select → crossover → mutate → replace. It also implements [`Iterator`],
//! so a run can be driven by a plain `for` loop.
//!
//! # Reseeding
//!
//! When a seed is configured, the solver's generator is re-created from it
//! before every mutation decision and every selection. Consecutive calls
//! therefore repeat the same draws until the seed is changed. This makes a
//! seeded run reproducible call by call; it also means a seeded
//! [`mutate_population`](GaSolver::mutate_population) either mutates every
//! individual or none of them.

use super::config::GaConfig;
use super::fitness_map::FitnessMap;
use super::selection::{Selection, Selector};
use super::types::{Fitness, GaProblem};
use crate::error::{GaError, GaResult};
use crate::random::{create_rng, rng_for};
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Lifecycle of a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverState {
    /// No solution yet and steps remain.
    Running,
    /// Some individual's fitness equals the target.
    Solved,
    /// The step cap was reached without a solution.
    Exhausted,
}

impl SolverState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SolverState::Running)
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolverState::Running => "running",
            SolverState::Solved => "solved",
            SolverState::Exhausted => "exhausted",
        })
    }
}

/// What a successful [`GaSolver::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new generation replaced the population.
    Evolved,
    /// The current population already holds a solution; nothing changed.
    Solved,
}

/// Report of one successful step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport<F> {
    /// Steps taken after this one.
    pub step: usize,
    pub outcome: StepOutcome,
    /// Best fitness of the population evaluated at the start of the step.
    pub best_fitness: F,
}

/// Result of [`GaSolver::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary<T> {
    /// Terminal state the run ended in.
    pub state: SolverState,

    /// Total number of evolved generations.
    pub steps: usize,

    /// First individual meeting the target, if the run was solved.
    pub solution: Option<T>,

    /// Best fitness observed at each successful step.
    pub fitness_history: Vec<f64>,
}

/// Genetic algorithm solver driving a population toward a target fitness.
///
/// # Usage
///
/// ```
/// use ga_solver::ga::{FnProblem, GaConfig, GaSolver};
/// use rand::{Rng, RngCore};
///
/// let problem = FnProblem::new(
///     |x: &i64| 1.0 / (1.0 + (x * x - 49).abs() as f64),
///     |x: i64, rng: &mut dyn RngCore| x + rng.random_range(-1..=1),
///     |a: &i64, b: &i64, _rng: &mut dyn RngCore| (a + b) / 2,
/// );
/// let config = GaConfig::new(1.0).with_prob_mutation(0.5).with_max_steps(50);
/// let mut solver = GaSolver::new(problem, vec![0, 2, 4, 6], config).unwrap();
///
/// let summary = solver.run().unwrap();
/// assert!(summary.state.is_terminal());
/// assert_eq!(solver.len(), 4);
/// ```
pub struct GaSolver<P: GaProblem, S = Selection> {
    problem: P,
    population: Vec<P::Individual>,
    config: GaConfig<P::Fitness>,
    selector: S,
    rng: StdRng,
    steps_taken: usize,
    state: SolverState,
    /// Set when iteration yielded a non-terminal error.
    halted: bool,
}

impl<P: GaProblem> GaSolver<P, Selection> {
    /// Creates a solver using the configured [`Selection`] strategy.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidConfiguration`] if the configuration is invalid or
    /// the population is empty.
    pub fn new(
        problem: P,
        population: Vec<P::Individual>,
        config: GaConfig<P::Fitness>,
    ) -> GaResult<Self> {
        let selection = config.selection;
        Self::with_selector(problem, population, config, selection)
    }
}

impl<P, S> GaSolver<P, S>
where
    P: GaProblem,
    S: Selector<P::Individual, P::Fitness>,
{
    /// Creates a solver with a custom selector.
    pub fn with_selector(
        problem: P,
        population: Vec<P::Individual>,
        config: GaConfig<P::Fitness>,
        selector: S,
    ) -> GaResult<Self> {
        config.validate()?;
        if population.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "initial population must not be empty".into(),
            ));
        }

        let rng = rng_for(config.random_seed);
        Ok(Self {
            problem,
            population,
            config,
            selector,
            rng,
            steps_taken: 0,
            state: SolverState::Running,
            halted: false,
        })
    }

    // ---- Accessors and tuning knobs ----

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &GaConfig<P::Fitness> {
        &self.config
    }

    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Replaces the population wholesale.
    ///
    /// The solver state is left as is; the next step evaluates the new
    /// population.
    pub fn set_population(&mut self, population: Vec<P::Individual>) {
        self.population = population;
        self.halted = false;
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.config.random_seed
    }

    /// Changes the seed used from the next probabilistic operation on.
    pub fn set_random_seed(&mut self, seed: Option<u64>) {
        self.config.random_seed = seed;
        if seed.is_none() {
            self.rng = rng_for(None);
        }
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.config.max_steps
    }

    /// Changes the step cap.
    ///
    /// Does not leave a terminal state; use [`reset_steps`](Self::reset_steps)
    /// to resume an exhausted solver.
    pub fn set_max_steps(&mut self, max_steps: Option<usize>) {
        self.config.max_steps = max_steps;
    }

    /// Zeroes the step counter, resuming an exhausted solver.
    ///
    /// A solved solver stays solved.
    pub fn reset_steps(&mut self) {
        self.steps_taken = 0;
        self.halted = false;
        if self.state == SolverState::Exhausted {
            self.state = SolverState::Running;
        }
    }

    /// Population size.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    // ---- Fitness views (recomputed on every call) ----

    /// Evaluates the current population into a [`FitnessMap`].
    ///
    /// Equal individuals collapse into one entry.
    pub fn current_state(&self) -> FitnessMap<P::Individual, P::Fitness> {
        self.population
            .iter()
            .map(|ind| (ind.clone(), self.problem.evaluate(ind)))
            .collect()
    }

    /// Evaluates the current population, aligned with population order.
    pub fn fitness_values(&self) -> Vec<P::Fitness> {
        self.population
            .iter()
            .map(|ind| self.problem.evaluate(ind))
            .collect()
    }

    /// Whether any individual's fitness equals the target exactly.
    pub fn solution_found(&self) -> bool {
        self.solution().is_some()
    }

    /// First individual whose fitness equals the target.
    pub fn solution(&self) -> Option<&P::Individual> {
        self.population
            .iter()
            .find(|ind| self.problem.evaluate(ind) == self.config.target_value)
    }

    // ---- Operators ----

    /// Mutates `individual` with probability `prob_mutation`.
    ///
    /// Re-seeds the generator first when a seed is configured.
    pub fn mutate(&mut self, individual: P::Individual) -> P::Individual {
        self.reseed();
        let draw: f64 = self.rng.random();
        if draw < self.config.prob_mutation {
            self.problem.mutate(individual, &mut self.rng)
        } else {
            individual
        }
    }

    /// Applies [`mutate`](Self::mutate) to every individual.
    pub fn mutate_population(&mut self) {
        let population = std::mem::take(&mut self.population);
        let mutated: Vec<P::Individual> =
            population.into_iter().map(|ind| self.mutate(ind)).collect();
        self.population = mutated;
    }

    /// Recombines two individuals with the problem's crossover.
    pub fn crossover(&mut self, a: &P::Individual, b: &P::Individual) -> P::Individual {
        self.problem.crossover(a, b, &mut self.rng)
    }

    /// Draws parents from the current population.
    ///
    /// The count follows `selection_rate` (the full population size by
    /// default). Draws are always made with replacement: `replace = false`
    /// keeps the fixed count but does not guarantee distinct parents.
    pub fn select(&mut self, replace: bool) -> GaResult<Vec<P::Individual>> {
        let mapping = self.current_state();
        trace!(replace, "selecting parents");
        self.select_from(&mapping)
    }

    fn select_from(
        &mut self,
        mapping: &FitnessMap<P::Individual, P::Fitness>,
    ) -> GaResult<Vec<P::Individual>> {
        let count = self.config.selection_count(self.population.len());
        self.reseed();
        let parents = self.selector.select(mapping, count, &mut self.rng)?;
        trace!(requested = count, selected = parents.len(), "parents selected");
        Ok(parents)
    }

    /// Rebuilds a full-size generation by crossing consecutive parents,
    /// wrapping around the parent list.
    fn breed(&mut self, parents: &[P::Individual]) -> GaResult<Vec<P::Individual>> {
        if parents.is_empty() {
            return Err(GaError::degenerate("selection returned no parents"));
        }
        let k = parents.len();
        Ok((0..self.population.len())
            .map(|i| self.crossover(&parents[i % k], &parents[(i + 1) % k]))
            .collect())
    }

    fn reseed(&mut self) {
        if let Some(seed) = self.config.random_seed {
            self.rng = create_rng(seed);
        }
    }

    // ---- Stepping ----

    /// Advances the solver by one generation.
    ///
    /// Returns [`StepOutcome::Solved`] without touching the population if
    /// the current generation already meets the target; the solver is then
    /// terminal.
    ///
    /// # Errors
    ///
    /// - [`GaError::IterationExhausted`] if the solver is already terminal,
    ///   or if `max_steps` generations have been evolved (the solver becomes
    ///   [`SolverState::Exhausted`]).
    /// - [`GaError::DegeneratePopulation`] if selection is undefined for the
    ///   current fitness values. The population is left unchanged.
    ///
    /// # Cost
    ///
    /// Each step builds a [`FitnessMap`] of the population, which dedups by
    /// `PartialEq` with a linear scan per insertion: O(n²) comparisons for a
    /// population of `n`, on top of `n` evaluations. Duplicate individuals
    /// share one wheel slot.
    pub fn step(&mut self) -> GaResult<StepReport<P::Fitness>> {
        if self.state.is_terminal() {
            return Err(self.exhausted());
        }

        let fitness = self.fitness_values();
        let best = best_of(&fitness)
            .ok_or_else(|| GaError::degenerate("population is empty"))?;

        if fitness.iter().any(|f| *f == self.config.target_value) {
            self.state = SolverState::Solved;
            debug!(steps = self.steps_taken, best = ?best, "solution found");
            return Ok(StepReport {
                step: self.steps_taken,
                outcome: StepOutcome::Solved,
                best_fitness: best,
            });
        }

        if let Some(max) = self.config.max_steps {
            if self.steps_taken >= max {
                self.state = SolverState::Exhausted;
                debug!(steps = self.steps_taken, max, "step budget exhausted");
                return Err(self.exhausted());
            }
        }

        let mapping: FitnessMap<_, _> = self
            .population
            .iter()
            .cloned()
            .zip(fitness.iter().copied())
            .collect();
        let parents = self.select_from(&mapping)?;
        let children = self.breed(&parents)?;
        let next: Vec<P::Individual> = children.into_iter().map(|c| self.mutate(c)).collect();
        self.population = next;
        self.steps_taken += 1;

        debug!(step = self.steps_taken, best = ?best, size = self.population.len(), "generation evolved");
        self.problem.on_generation(self.steps_taken, best);

        Ok(StepReport {
            step: self.steps_taken,
            outcome: StepOutcome::Evolved,
            best_fitness: best,
        })
    }

    /// Steps until the solver is solved or exhausted.
    ///
    /// Without `max_steps` this loops until a solution appears.
    pub fn run(&mut self) -> GaResult<RunSummary<P::Individual>> {
        let mut fitness_history = Vec::new();
        loop {
            match self.step() {
                Ok(report) => {
                    fitness_history.push(report.best_fitness.to_f64());
                    if report.outcome == StepOutcome::Solved {
                        break;
                    }
                }
                Err(e) if e.is_exhausted() => break,
                Err(e) => return Err(e),
            }
        }

        Ok(RunSummary {
            state: self.state,
            steps: self.steps_taken,
            solution: self.solution().cloned(),
            fitness_history,
        })
    }

    fn exhausted(&self) -> GaError {
        GaError::IterationExhausted {
            state: self.state,
            steps: self.steps_taken,
        }
    }
}

impl<P, S> Iterator for GaSolver<P, S>
where
    P: GaProblem,
    S: Selector<P::Individual, P::Fitness>,
{
    type Item = GaResult<StepReport<P::Fitness>>;

    /// Yields one report per step. Ends after a solved step, when the step
    /// cap is reached, or right after yielding any other error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.state.is_terminal() {
            return None;
        }
        match self.step() {
            Ok(report) => Some(Ok(report)),
            Err(e) if e.is_exhausted() => None,
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}

/// Greatest fitness value, or `None` for an empty slice.
fn best_of<F: Fitness>(fitness: &[F]) -> Option<F> {
    fitness.iter().copied().fold(None, |best, f| match best {
        Some(b) if b >= f => Some(b),
        _ => Some(f),
    })
}

// ============================================================================
// Tests
// ============================================================================
