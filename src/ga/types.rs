//! Core trait definitions for the GA solver.
//!
//! [`GaProblem`] is the capability set the solver consumes: evaluation,
//! mutation and crossover are supplied by the caller and injected at
//! construction. [`Fitness`] describes the numeric values `evaluate`
//! produces.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness is compared to the target by exact equality and converted to
/// `f64` for roulette normalization. **Higher fitness is better**: the
/// roulette wheel gives each individual a share proportional to its value.
///
/// Implemented for all primitive integer and float types.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for normalization and logging.
    fn to_f64(self) -> f64;
}

macro_rules! impl_fitness {
    ($($t:ty),* $(,)?) => {
        $(
            impl Fitness for $t {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss, clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_fitness!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Defines a GA problem.
///
/// The solver owns the population; the problem only knows how to score and
/// recombine individuals. Operators receive the solver's generator so a
/// seeded run is reproducible end to end.
///
/// # Implementing
///
/// ```
/// use ga_solver::ga::GaProblem;
/// use rand::Rng;
///
/// struct Root49;
///
/// impl GaProblem for Root49 {
///     type Individual = f64;
///     type Fitness = f64;
///
///     fn evaluate(&self, x: &f64) -> f64 {
///         1.0 / (x * x - 49.0).abs().max(1e-9)
///     }
///
///     fn mutate<R: Rng>(&self, x: f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
///
///     fn crossover<R: Rng>(&self, a: &f64, b: &f64, _rng: &mut R) -> f64 {
///         (a + b) / 2.0
///     }
/// }
/// ```
pub trait GaProblem {
    /// The candidate solution type. Equality is used to collapse
    /// duplicates in a [`FitnessMap`](super::FitnessMap).
    type Individual: Clone + PartialEq;

    /// The fitness type produced by [`evaluate`](Self::evaluate).
    type Fitness: Fitness;

    /// Evaluates an individual and returns its fitness.
    fn evaluate(&self, individual: &Self::Individual) -> Self::Fitness;

    /// Returns a mutated version of `individual`.
    ///
    /// The solver decides *whether* to mutate (see `prob_mutation`); this
    /// only says *how*. The default implementation returns it unchanged.
    fn mutate<R: Rng>(&self, individual: Self::Individual, _rng: &mut R) -> Self::Individual {
        individual
    }

    /// Produces one child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Called after each evolved generation with the step count and the
    /// best fitness of the generation that was just replaced.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _step: usize, _best_fitness: Self::Fitness) {}
}
