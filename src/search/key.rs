//! Hashable keys over `f64` lengths for the memoization tables.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A total-order, hashable key for an `f64` length.
///
/// Ordering follows IEEE-754 total order (`total_cmp`), equality and hashing
/// use the bit pattern, so the two agree. Lengths reaching the engine are
/// validated finite and positive; `-0.0` is folded into `0.0` so that a
/// fully consumed lane always produces the same key.
#[derive(Debug, Clone, Copy)]
pub struct LengthKey(f64);

impl LengthKey {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Sorted keys for a multiset of lengths.
    pub fn sorted(values: &[f64]) -> Vec<LengthKey> {
        let mut keys: Vec<LengthKey> = values.iter().copied().map(LengthKey::new).collect();
        keys.sort();
        keys
    }
}

impl PartialEq for LengthKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for LengthKey {}

impl Hash for LengthKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Ord for LengthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for LengthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
