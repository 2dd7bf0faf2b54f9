//! Half-open interval map used as the roulette wheel.
//!
//! [`RangeMap`] associates disjoint intervals `[start, end)` with values and
//! resolves a point to the value whose interval contains it. The greatest
//! `end` of the map is treated as inclusive, so a wheel built from
//! cumulative probabilities still resolves a draw of exactly `1.0`.
//!
//! # Overlap policy
//!
//! Partially overlapping intervals are rejected with
//! [`GaError::OverlappingInterval`]. Setting the identical non-empty
//! `(start, end)` pair again replaces its value in place. Zero-width
//! intervals are always appended, even when an equal one exists: they show
//! up in iteration and display but never resolve a lookup.

use crate::error::{GaError, GaResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    start: K,
    end: K,
    value: V,
}

impl<K: PartialOrd, V> Entry<K, V> {
    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Map from half-open intervals to values, with point lookup.
///
/// Entries iterate in insertion order; lookups go through a start-sorted
/// index of the non-empty intervals and cost O(log n).
///
/// ```
/// use ga_solver::ga::RangeMap;
///
/// let mut map = RangeMap::new();
/// map.set(0, 10, "a").unwrap();
/// map.set(10, 20, "b").unwrap();
///
/// assert_eq!(map.get(9).unwrap(), &"a");
/// assert_eq!(map.get(10).unwrap(), &"b");
/// assert_eq!(map.get(20).unwrap(), &"b"); // inclusive top
/// assert!(map.get(21).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangeMap<K, V> {
    entries: Vec<Entry<K, V>>,
    /// Indices into `entries` of non-empty intervals, ascending by start.
    sorted: Vec<usize>,
}

impl<K, V> Default for RangeMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            sorted: Vec::new(),
        }
    }
}

impl<K: PartialOrd + Copy + fmt::Debug, V> RangeMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` for the interval `[start, end)`.
    ///
    /// # Errors
    ///
    /// - [`GaError::InvalidInterval`] if `start > end` or the bounds are not
    ///   comparable (NaN).
    /// - [`GaError::OverlappingInterval`] if the interval partially overlaps
    ///   a registered non-empty interval.
    pub fn set(&mut self, start: K, end: K, value: V) -> GaResult<()> {
        match start.partial_cmp(&end) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => {
                return Err(GaError::InvalidInterval {
                    start: format!("{start:?}"),
                    end: format!("{end:?}"),
                })
            }
        }

        let entry = Entry { start, end, value };
        if entry.is_empty() {
            self.entries.push(entry);
            return Ok(());
        }

        if let Some(&i) = self
            .sorted
            .iter()
            .find(|&&i| self.entries[i].start == start && self.entries[i].end == end)
        {
            self.entries[i].value = entry.value;
            return Ok(());
        }

        let overlaps = self.sorted.iter().any(|&i| {
            let other = &self.entries[i];
            start < other.end && other.start < end
        });
        if overlaps {
            return Err(GaError::OverlappingInterval {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }

        let pos = self
            .sorted
            .partition_point(|&i| self.entries[i].start < start);
        self.entries.push(entry);
        self.sorted.insert(pos, self.entries.len() - 1);
        Ok(())
    }

    /// Returns the value whose interval contains `point`.
    ///
    /// A point equal to the greatest registered `end` resolves to the last
    /// interval.
    ///
    /// # Errors
    ///
    /// [`GaError::OutOfRange`] if `point` lies below the smallest start,
    /// above the greatest end, or inside a gap between intervals.
    pub fn get(&self, point: K) -> GaResult<&V> {
        let pos = self
            .sorted
            .partition_point(|&i| self.entries[i].start <= point);
        if pos > 0 {
            let entry = &self.entries[self.sorted[pos - 1]];
            if point < entry.end {
                return Ok(&entry.value);
            }
        }

        if let Some(&top) = self.sorted.last() {
            let entry = &self.entries[top];
            if point == entry.end {
                return Ok(&entry.value);
            }
        }

        Err(GaError::OutOfRange {
            point: format!("{point:?}"),
        })
    }

    /// Smallest start and greatest end over the non-empty intervals.
    pub fn bounds(&self) -> Option<(K, K)> {
        let first = &self.entries[*self.sorted.first()?];
        let last = &self.entries[*self.sorted.last()?];
        Some((first.start, last.end))
    }
}

impl<K, V> RangeMap<K, V> {
    /// Number of registered intervals, including zero-width ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(interval, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Range<K>, &V)> + '_
    where
        K: Copy,
    {
        self.entries.iter().map(|e| (e.start..e.end, &e.value))
    }
}

impl<K: fmt::Display, V: fmt::Debug> fmt::Display for RangeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {}): {:?}", e.start, e.end, e.value)?;
        }
        f.write_str("}")
    }
}
