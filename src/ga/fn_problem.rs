//! Closure-backed [`GaProblem`].

use super::types::{Fitness, GaProblem};
use rand::{Rng, RngCore};
use std::fmt;
use std::marker::PhantomData;

/// A [`GaProblem`] assembled from three plain closures.
///
/// Useful when the operators are one-liners and a dedicated type would be
/// noise. Mutation and crossover receive the solver's generator as a
/// `&mut dyn RngCore`, so every [`Rng`] method is available on it.
///
/// ```
/// use ga_solver::ga::FnProblem;
/// use rand::{Rng, RngCore};
///
/// let problem = FnProblem::new(
///     |x: &f64| -(x - 3.0).abs(),
///     |x: f64, rng: &mut dyn RngCore| x + rng.random_range(-1.0..1.0),
///     |a: &f64, b: &f64, _rng: &mut dyn RngCore| (a + b) / 2.0,
/// );
/// # let _ = problem;
/// ```
pub struct FnProblem<T, F, G, M, C> {
    goal: G,
    mutation: M,
    crossover: C,
    _marker: PhantomData<fn(T) -> F>,
}

impl<T, F, G, M, C> FnProblem<T, F, G, M, C> {
    /// Builds a problem from a goal, a mutation and a crossover closure.
    pub fn new(goal: G, mutation: M, crossover: C) -> Self
    where
        G: Fn(&T) -> F,
        M: Fn(T, &mut dyn RngCore) -> T,
        C: Fn(&T, &T, &mut dyn RngCore) -> T,
    {
        Self {
            goal,
            mutation,
            crossover,
            _marker: PhantomData,
        }
    }
}

impl<T, F, G, M, C> GaProblem for FnProblem<T, F, G, M, C>
where
    T: Clone + PartialEq,
    F: Fitness,
    G: Fn(&T) -> F,
    M: Fn(T, &mut dyn RngCore) -> T,
    C: Fn(&T, &T, &mut dyn RngCore) -> T,
{
    type Individual = T;
    type Fitness = F;

    fn evaluate(&self, individual: &T) -> F {
        (self.goal)(individual)
    }

    fn mutate<R: Rng>(&self, individual: T, rng: &mut R) -> T {
        let rng: &mut dyn RngCore = rng;
        (self.mutation)(individual, rng)
    }

    fn crossover<R: Rng>(&self, parent1: &T, parent2: &T, rng: &mut R) -> T {
        let rng: &mut dyn RngCore = rng;
        (self.crossover)(parent1, parent2, rng)
    }
}

impl<T, F, G, M, C> fmt::Debug for FnProblem<T, F, G, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish_non_exhaustive()
    }
}
