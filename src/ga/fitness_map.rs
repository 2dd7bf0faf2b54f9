//! Individual-to-fitness mapping consumed by the selectors.

use super::types::Fitness;

/// Ordered mapping from individuals to their fitness values.
///
/// Keys are unique by `PartialEq`: inserting an individual equal to one
/// already present keeps the original position and overwrites the fitness.
/// Callers that need multiset semantics (equal individuals counted
/// separately) must wrap their individuals so they compare distinct.
///
/// Only `PartialEq` is required of keys, so floats work as individuals;
/// the price is a linear scan per insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessMap<T, F> {
    entries: Vec<(T, F)>,
}

impl<T, F> Default for FitnessMap<T, F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq, F> FitnessMap<T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the fitness of `individual`.
    ///
    /// Returns the previous fitness if the individual was already present.
    pub fn insert(&mut self, individual: T, fitness: F) -> Option<F> {
        match self.entries.iter_mut().find(|(k, _)| *k == individual) {
            Some((_, slot)) => Some(std::mem::replace(slot, fitness)),
            None => {
                self.entries.push((individual, fitness));
                None
            }
        }
    }

    pub fn get(&self, individual: &T) -> Option<&F> {
        self.entries
            .iter()
            .find(|(k, _)| k == individual)
            .map(|(_, f)| f)
    }

    pub fn contains(&self, individual: &T) -> bool {
        self.get(individual).is_some()
    }
}

impl<T, F> FitnessMap<T, F> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(individual, fitness)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &F)> + '_ {
        self.entries.iter().map(|(k, f)| (k, f))
    }

    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &F> + '_ {
        self.entries.iter().map(|(_, f)| f)
    }
}

impl<T, F: Fitness> FitnessMap<T, F> {
    /// Sum of all fitness values as `f64`.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, f)| f.to_f64()).sum()
    }
}

impl<T: PartialEq, F> FromIterator<(T, F)> for FitnessMap<T, F> {
    fn from_iter<I: IntoIterator<Item = (T, F)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, f) in iter {
            map.insert(k, f);
        }
        map
    }
}

impl<T, F> IntoIterator for FitnessMap<T, F> {
    type Item = (T, F);
    type IntoIter = std::vec::IntoIter<(T, F)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_individuals_collapse() {
        let map: FitnessMap<i32, i32> = [(1, 10), (2, 4), (1, 7)].into_iter().collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&7));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut map = FitnessMap::new();
        assert_eq!(map.insert("a", 1.0), None);
        assert_eq!(map.insert("a", 2.0), Some(1.0));
        assert!(map.contains(&"a"));
        assert!(!map.contains(&"b"));
    }

    #[test]
    fn test_total() {
        let map: FitnessMap<&str, u32> = [("a", 10), ("b", 10), ("c", 20)].into_iter().collect();
        assert_eq!(map.total(), 40.0);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 10, 20]);
    }

    #[test]
    fn test_float_individuals() {
        let map: FitnessMap<f64, f64> = [(0.5, 1.0), (1.5, 2.0)].into_iter().collect();
        assert_eq!(map.get(&1.5), Some(&2.0));
        assert!(map.get(&2.5).is_none());
    }
}
