//! Set partition enumeration over the vehicle multiset.
//!
//! Partitions are walked through their restricted growth codes: element `i`
//! is placed in group `codes[i]`, where `codes[0] == 0` and every code is at
//! most one above the largest code before it. Stepping the codes like an
//! odometer visits every partition exactly once without recursion, so the
//! enumeration depth does not grow with the vehicle count.

use std::collections::HashSet;

use super::key::LengthKey;

/// One group of vehicle lengths, housed as a whole by a single listing.
pub type Group = Vec<f64>;

/// A split of the vehicle multiset into non-empty groups.
pub type Partition = Vec<Group>;

/// Lazy iterator over every set partition of a slice.
///
/// Yields Bell(n) partitions for `n` elements. Groups are listed in order of
/// their first element; an empty slice yields a single empty partition.
#[derive(Debug, Clone)]
pub struct SetPartitions<'a, T> {
    items: &'a [T],
    codes: Vec<usize>,
    /// `maxes[i]` is the largest code among `codes[..=i]`.
    maxes: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> SetPartitions<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            codes: vec![0; items.len()],
            maxes: vec![0; items.len()],
            done: false,
        }
    }

    fn materialize(&self) -> Vec<Vec<T>> {
        let group_count = self.maxes.last().map_or(0, |max| max + 1);
        let mut groups: Vec<Vec<T>> = vec![Vec::new(); group_count];
        for (item, &code) in self.items.iter().zip(&self.codes) {
            groups[code].push(item.clone());
        }
        groups
    }

    /// Moves to the next code sequence, or marks the walk finished.
    fn advance(&mut self) {
        let n = self.codes.len();
        for i in (1..n).rev() {
            if self.codes[i] <= self.maxes[i - 1] {
                self.codes[i] += 1;
                self.maxes[i] = self.maxes[i - 1].max(self.codes[i]);
                for j in i + 1..n {
                    self.codes[j] = 0;
                    self.maxes[j] = self.maxes[i];
                }
                return;
            }
        }
        self.done = true;
    }
}

impl<T: Clone> Iterator for SetPartitions<'_, T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let partition = self.materialize();
        self.advance();
        Some(partition)
    }
}

/// Collects the partitions of a vehicle multiset that differ as multisets.
///
/// Vehicles are enumerated as distinguishable; a partition whose sorted
/// groups repeat an earlier one describes the same packing problem and is
/// skipped. The first occurrence in generation order is kept.
///
/// Also returns the raw number of partitions walked.
pub fn distinct_partitions(lengths: &[f64]) -> (Vec<Partition>, usize) {
    let mut seen: HashSet<Vec<Vec<LengthKey>>> = HashSet::new();
    let mut partitions = Vec::new();
    let mut walked = 0;

    for partition in SetPartitions::new(lengths) {
        walked += 1;
        let mut canonical: Vec<Vec<LengthKey>> =
            partition.iter().map(|group| LengthKey::sorted(group)).collect();
        canonical.sort();
        if seen.insert(canonical) {
            partitions.push(partition);
        }
    }

    (partitions, walked)
}
