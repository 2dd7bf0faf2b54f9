//! Fitness-proportionate selection.
//!
//! Two selection semantics are provided, with different output sizes:
//!
//! - **Roulette** (fixed count): the cumulative normalized fitness is laid
//!   out on `[0, 1]` as a [`RangeMap`] wheel, then exactly `count` uniform
//!   draws are resolved against it, with replacement. The solver uses this
//!   one, since it keeps the population size constant.
//! - **Bernoulli** (variable count): every individual is included
//!   independently with probability equal to its own normalized fitness.
//!   The result can be empty or contain the whole mapping.
//!
//! Fitness must be non-negative and finite with a positive total; anything
//! else is reported as [`GaError::DegeneratePopulation`].
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"

use super::fitness_map::FitnessMap;
use super::range_map::RangeMap;
use super::types::Fitness;
use crate::error::{GaError, GaResult};
use crate::random::rng_for;
use rand::Rng;
use tracing::trace;

/// Named selection strategies.
///
/// # Examples
///
/// ```
/// use ga_solver::ga::{FitnessMap, Selection, Selector};
/// use ga_solver::random::create_rng;
///
/// let mapping: FitnessMap<&str, u32> =
///     [("a", 10), ("b", 10), ("c", 20)].into_iter().collect();
/// let mut rng = create_rng(42);
///
/// let picked = Selection::Roulette.select(&mapping, 5, &mut rng).unwrap();
/// assert_eq!(picked.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fixed-count draws from the cumulative wheel, with replacement.
    ///
    /// # Complexity
    /// O(n) to build the wheel, O(log n) per draw
    #[default]
    Roulette,

    /// Independent inclusion with probability `fitness / total`.
    ///
    /// Ignores the requested count.
    ///
    /// # Complexity
    /// O(n)
    Bernoulli,
}

/// A selection strategy the solver can be plugged with.
///
/// `count` is the number of parents the solver asks for. Strategies with a
/// data-dependent output size may return a different number; the solver
/// recycles whatever is returned to rebuild a full generation, and treats
/// an empty selection as degenerate.
pub trait Selector<T, F> {
    fn select<R: Rng>(
        &self,
        mapping: &FitnessMap<T, F>,
        count: usize,
        rng: &mut R,
    ) -> GaResult<Vec<T>>;
}

impl<T: Clone, F: Fitness> Selector<T, F> for Selection {
    fn select<R: Rng>(
        &self,
        mapping: &FitnessMap<T, F>,
        count: usize,
        rng: &mut R,
    ) -> GaResult<Vec<T>> {
        match self {
            Selection::Roulette => {
                let wheel = build_roulette(mapping)?;
                roulette_draw(&wheel, count, rng)
            }
            Selection::Bernoulli => bernoulli_select(mapping, rng),
        }
    }
}

/// Builds the cumulative-probability wheel for `mapping`.
///
/// Each individual gets the sub-interval of `[0, 1)` proportional to its
/// normalized fitness, in the mapping's iteration order. The last interval
/// ends at exactly `1.0`, which the wheel resolves inclusively.
///
/// ```
/// use ga_solver::ga::{build_roulette, FitnessMap};
///
/// let mapping: FitnessMap<&str, u32> =
///     [("a", 10), ("b", 10), ("c", 20)].into_iter().collect();
/// let wheel = build_roulette(&mapping).unwrap();
///
/// assert_eq!(
///     wheel.to_string(),
///     r#"{(0, 0.25): "a", (0.25, 0.5): "b", (0.5, 1): "c"}"#
/// );
/// ```
pub fn build_roulette<T: Clone, F: Fitness>(
    mapping: &FitnessMap<T, F>,
) -> GaResult<RangeMap<f64, T>> {
    let probabilities = normalize(mapping)?;
    let last = probabilities.len() - 1;

    let mut wheel = RangeMap::new();
    let mut start = 0.0;
    for (i, (individual, p)) in mapping.keys().zip(probabilities).enumerate() {
        // Rounding can push the running sum past 1.0.
        let end = if i == last { 1.0 } else { (start + p).min(1.0) };
        wheel.set(start, end, individual.clone())?;
        start = end;
    }
    Ok(wheel)
}

/// Performs `count` uniform draws against `wheel`, with replacement.
pub fn roulette_draw<T: Clone, R: Rng>(
    wheel: &RangeMap<f64, T>,
    count: usize,
    rng: &mut R,
) -> GaResult<Vec<T>> {
    (0..count)
        .map(|_| {
            let point: f64 = rng.random();
            trace!(point, "roulette draw");
            wheel.get(point).cloned()
        })
        .collect()
}

/// Includes each individual independently with probability
/// `fitness / total`.
pub fn bernoulli_select<T: Clone, F: Fitness, R: Rng>(
    mapping: &FitnessMap<T, F>,
    rng: &mut R,
) -> GaResult<Vec<T>> {
    let probabilities = normalize(mapping)?;
    let selected: Vec<T> = mapping
        .keys()
        .zip(probabilities)
        .filter_map(|(individual, p)| (rng.random::<f64>() < p).then(|| individual.clone()))
        .collect();
    trace!(selected = selected.len(), of = mapping.len(), "bernoulli selection");
    Ok(selected)
}

/// Roulette selection of `count` individuals with a fresh generator.
///
/// With `Some(seed)` the generator is re-seeded on every call, so repeated
/// calls with the same seed return the same selection.
pub fn roulette_selection<T: Clone, F: Fitness>(
    mapping: &FitnessMap<T, F>,
    count: usize,
    seed: Option<u64>,
) -> GaResult<Vec<T>> {
    let wheel = build_roulette(mapping)?;
    roulette_draw(&wheel, count, &mut rng_for(seed))
}

/// Bernoulli selection with a fresh generator, seeded like
/// [`roulette_selection`].
pub fn bernoulli_selection<T: Clone, F: Fitness>(
    mapping: &FitnessMap<T, F>,
    seed: Option<u64>,
) -> GaResult<Vec<T>> {
    bernoulli_select(mapping, &mut rng_for(seed))
}

/// Normalized fitness shares, aligned with the mapping's order.
fn normalize<T, F: Fitness>(mapping: &FitnessMap<T, F>) -> GaResult<Vec<f64>> {
    if mapping.is_empty() {
        return Err(GaError::degenerate("population is empty"));
    }

    let values: Vec<f64> = mapping.values().map(|f| f.to_f64()).collect();
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(GaError::degenerate(format!(
            "fitness {bad} is negative or not finite"
        )));
    }

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Err(GaError::degenerate("total fitness is zero"));
    }
    if !total.is_finite() {
        return Err(GaError::degenerate("total fitness overflows"));
    }

    Ok(values.into_iter().map(|v| v / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn mapping<T: PartialEq, F>(pairs: Vec<(T, F)>) -> FitnessMap<T, F> {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_build_roulette_proportions() {
        let wheel = build_roulette(&mapping(vec![("a", 10), ("b", 10), ("c", 20)])).unwrap();
        let intervals: Vec<_> = wheel.iter().map(|(r, v)| (r.start, r.end, *v)).collect();
        assert_eq!(
            intervals,
            vec![(0.0, 0.25, "a"), (0.25, 0.5, "b"), (0.5, 1.0, "c")]
        );
    }

    #[test]
    fn test_build_roulette_equal_fitness() {
        let wheel = build_roulette(&mapping(vec![("a", 10), ("b", 10), ("c", 10), ("d", 10)]))
            .unwrap();
        assert_eq!(
            wheel.to_string(),
            r#"{(0, 0.25): "a", (0.25, 0.5): "b", (0.5, 0.75): "c", (0.75, 1): "d"}"#
        );
        assert_eq!(wheel.get(1.0).unwrap(), &"d");
    }

    #[test]
    fn test_adjacent_zero_fitness_keep_their_slots() {
        let m = mapping(vec![(1, 0), (2, 0), (3, 5), (4, 0), (5, 0)]);
        let wheel = build_roulette(&m).unwrap();
        assert_eq!(wheel.len(), m.len());
        assert_eq!(
            wheel.to_string(),
            "{(0, 0): 1, (0, 0): 2, (0, 1): 3, (1, 1): 4, (1, 1): 5}"
        );
        assert_eq!(wheel.get(1.0).unwrap(), &3);
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let err = build_roulette(&mapping(vec![(1, 0.0), (2, 0.0)])).unwrap_err();
        assert!(matches!(err, GaError::DegeneratePopulation { .. }));
    }

    #[test]
    fn test_negative_fitness_is_degenerate() {
        let err = build_roulette(&mapping(vec![(1, -49), (2, 45)])).unwrap_err();
        assert!(matches!(err, GaError::DegeneratePopulation { .. }));
    }

    #[test]
    fn test_empty_mapping_is_degenerate() {
        let empty: FitnessMap<u8, f64> = FitnessMap::new();
        assert!(roulette_selection(&empty, 3, Some(1)).is_err());
        assert!(bernoulli_selection(&empty, Some(1)).is_err());
    }

    #[test]
    fn test_roulette_draw_count_is_exact() {
        let m = mapping(vec![(1, 10), (2, 4), (3, 200), (9, 20)]);
        for count in [0, 1, 4, 33] {
            let picked = roulette_selection(&m, count, Some(4242424242)).unwrap();
            assert_eq!(picked.len(), count);
            assert!(picked.iter().all(|x| m.contains(x)));
        }
    }

    #[test]
    fn test_roulette_seeded_single_draw() {
        let m = mapping(vec![(1, 10), (2, 4), (3, 200), (9, 20)]);
        assert_eq!(roulette_selection(&m, 1, Some(4242424242)).unwrap(), vec![3]);
    }

    #[test]
    fn test_roulette_seed_reproduces_selection() {
        let m = mapping(vec![("a", 10), ("b", 10), ("c", 10), ("d", 10)]);
        let selected: HashSet<Vec<&str>> = (0..10)
            .map(|_| roulette_selection(&m, 1, Some(42424)).unwrap())
            .collect();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_roulette_favors_dominant_fitness() {
        let m = mapping(vec![(1, 10), (2, 4), (3, 200), (9, 20)]);
        let picked = roulette_selection(&m, 10_000, Some(4242424242)).unwrap();
        let dominant = picked.iter().filter(|&&x| x == 3).count();
        // Expected share is 200 / 234 ≈ 85%.
        assert!(
            dominant > 7_500,
            "expected the dominant individual most of the time, got {dominant}/10000"
        );
    }

    #[test]
    fn test_zero_fitness_never_drawn() {
        let m = mapping(vec![("a", 0), ("b", 5), ("c", 0)]);
        let picked = roulette_selection(&m, 500, None).unwrap();
        assert!(picked.iter().all(|&x| x == "b"));
    }

    #[test]
    fn test_bernoulli_size_is_data_dependent() {
        let m = mapping(vec![("a", 0), ("b", 5), ("c", 0)]);
        assert_eq!(bernoulli_selection(&m, None).unwrap(), vec!["b"]);

        let even = mapping((0..100).map(|i| (i, 1.0)).collect());
        let mut rng = create_rng(7);
        let sizes: HashSet<usize> = (0..50)
            .map(|_| bernoulli_select(&even, &mut rng).unwrap().len())
            .collect();
        assert!(sizes.len() > 1, "bernoulli output size should vary");
    }

    #[test]
    fn test_bernoulli_seed_reproduces_selection() {
        let m = mapping(vec![(1, 10), (2, 4), (3, 200), (9, 20)]);
        let a = bernoulli_selection(&m, Some(4242424242)).unwrap();
        let b = bernoulli_selection(&m, Some(4242424242)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_enum_dispatch() {
        let m = mapping(vec![(1, 1.0), (2, 3.0)]);
        let mut rng = create_rng(3);
        assert_eq!(Selection::default(), Selection::Roulette);
        assert_eq!(Selection::Roulette.select(&m, 6, &mut rng).unwrap().len(), 6);
        assert!(Selection::Bernoulli.select(&m, 6, &mut rng).unwrap().len() <= 2);
    }

    proptest! {
        #[test]
        fn prop_wheel_partitions_unit_interval(weights in prop::collection::vec(1u32..1000, 1..40)) {
            let m: FitnessMap<usize, u32> = weights.iter().copied().enumerate().collect();
            let wheel = build_roulette(&m).unwrap();

            let intervals: Vec<_> = wheel.iter().map(|(r, _)| r).collect();
            prop_assert_eq!(intervals.len(), weights.len());
            prop_assert_eq!(intervals[0].start, 0.0);
            for pair in intervals.windows(2) {
                prop_assert!(pair[0].start <= pair[0].end);
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            prop_assert_eq!(intervals[intervals.len() - 1].end, 1.0);
            prop_assert!(wheel.get(1.0).is_ok());
            prop_assert!(wheel.get(0.0).is_ok());
        }
    }
}
