//! Group-to-listing feasibility with orientation exclusivity.
//!
//! A group is housed in a listing under exactly one orientation:
//!
//! - [`Orientation::AlongLength`]: every vehicle fits unrotated (length <=
//!   listing length). Lanes run along the listing length and there are
//!   `floor(width / vehicle_width)` of them.
//! - [`Orientation::AcrossWidth`]: every vehicle is too long for the listing
//!   length but fits across its width. Lanes run along the width and there
//!   are `floor(length / vehicle_width)` of them.
//!
//! The preconditions are disjoint for any non-empty group, so rotated and
//! unrotated vehicles never share a listing.

use std::collections::HashMap;

use super::key::LengthKey;
use super::packing::can_pack;

/// Which listing dimension the lanes run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    AlongLength,
    AcrossWidth,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::AlongLength, Orientation::AcrossWidth];

    /// Returns true if every vehicle in `group` may use this orientation.
    pub fn admits(self, group: &[f64], length: f64, width: f64) -> bool {
        match self {
            Orientation::AlongLength => group.iter().all(|&v| v <= length),
            Orientation::AcrossWidth => group.iter().all(|&v| v > length && v <= width),
        }
    }

    /// Returns `(lane capacity, dimension split into lanes)`.
    pub fn lane_geometry(self, length: f64, width: f64) -> (f64, f64) {
        match self {
            Orientation::AlongLength => (length, width),
            Orientation::AcrossWidth => (width, length),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FitKey {
    orientation: Orientation,
    group: Vec<LengthKey>,
    length: LengthKey,
    width: LengthKey,
}

/// Memoizing feasibility check shared by every search of one engine.
///
/// Answers depend only on the sorted group lengths and the listing footprint,
/// so the cache stays valid across groups, listings, partitions and calls.
/// Mutation requires `&mut self`; an oracle is not meant to be shared between
/// concurrent searches.
#[derive(Debug, Clone)]
pub struct FeasibilityOracle {
    vehicle_width: f64,
    cache: HashMap<FitKey, bool>,
    hits: u64,
    misses: u64,
}

impl FeasibilityOracle {
    /// Creates an oracle for vehicles of the given (positive) width.
    pub fn new(vehicle_width: f64) -> Self {
        Self {
            vehicle_width,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn vehicle_width(&self) -> f64 {
        self.vehicle_width
    }

    /// Returns true if `group` fits a `length` x `width` listing.
    ///
    /// An empty group always fits.
    pub fn fits(&mut self, group: &[f64], length: f64, width: f64) -> bool {
        group.is_empty() || self.orientation_for(group, length, width).is_some()
    }

    /// Returns the orientation under which `group` fits, if any.
    pub fn orientation_for(
        &mut self,
        group: &[f64],
        length: f64,
        width: f64,
    ) -> Option<Orientation> {
        let group_key = LengthKey::sorted(group);
        Orientation::ALL
            .into_iter()
            .find(|&orientation| self.check(orientation, group, &group_key, length, width))
    }

    fn check(
        &mut self,
        orientation: Orientation,
        group: &[f64],
        group_key: &[LengthKey],
        length: f64,
        width: f64,
    ) -> bool {
        if !orientation.admits(group, length, width) {
            return false;
        }

        let key = FitKey {
            orientation,
            group: group_key.to_vec(),
            length: LengthKey::new(length),
            width: LengthKey::new(width),
        };
        if let Some(&fit) = self.cache.get(&key) {
            self.hits += 1;
            return fit;
        }
        self.misses += 1;

        let (capacity, span) = orientation.lane_geometry(length, width);
        let lanes = (span / self.vehicle_width).floor() as usize;
        let fit = can_pack(group, lanes, capacity);
        self.cache.insert(key, fit);
        fit
    }

    /// Number of memoized (group, footprint, orientation) answers.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops all memoized answers and resets the counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
