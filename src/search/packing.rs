//! Lane packing decision procedure.
//!
//! Decides whether a multiset of vehicle lengths can be laid end to end into
//! a fixed number of equal lanes. This is bin packing in its decision form
//! and therefore NP-complete: the pruning below keeps typical requests fast
//! but the worst case stays exponential in the item count.
//!
//! Lengths are `f64`, so sums of fractional lengths carry rounding error
//! (`0.1 + 0.2 > 0.3`). Capacity comparisons allow a slack of
//! [`RELATIVE_TOLERANCE`] times the lane capacity, which lets exact fills
//! through without admitting any measurable overfill.

use std::collections::HashSet;

use super::key::LengthKey;

/// Search state proven infeasible: next item index plus the multiset of
/// remaining lane capacities.
type FailedState = (usize, Vec<LengthKey>);

/// Overfill tolerated per lane, relative to the lane capacity.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Returns true if `items` can be distributed over `lane_count` lanes without
/// any lane holding more than `lane_capacity`.
///
/// Items are placed largest first. At each step lanes sharing a remaining
/// capacity already tried are skipped, since they lead to the same subtree,
/// and states already proven infeasible are remembered.
pub fn can_pack(items: &[f64], lane_count: usize, lane_capacity: f64) -> bool {
    if items.is_empty() {
        return true;
    }
    if lane_count == 0 {
        return false;
    }

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let slack = lane_capacity * RELATIVE_TOLERANCE;
    if sorted[0] > lane_capacity + slack {
        return false;
    }
    let total: f64 = sorted.iter().sum();
    if total > (lane_capacity + slack) * lane_count as f64 {
        return false;
    }

    // Lanes beyond one per item stay empty in any placement.
    let mut lanes = vec![lane_capacity; lane_count.min(sorted.len())];
    let mut failed = HashSet::new();
    place(&sorted, 0, &mut lanes, slack, &mut failed)
}

fn place(
    items: &[f64],
    index: usize,
    lanes: &mut [f64],
    slack: f64,
    failed: &mut HashSet<FailedState>,
) -> bool {
    if index == items.len() {
        return true;
    }

    let state = (index, LengthKey::sorted(lanes));
    if failed.contains(&state) {
        return false;
    }

    let item = items[index];
    let mut tried: Vec<LengthKey> = Vec::with_capacity(lanes.len());

    for lane in 0..lanes.len() {
        let remaining = lanes[lane];
        if item > remaining + slack {
            continue;
        }
        let key = LengthKey::new(remaining);
        if tried.contains(&key) {
            continue;
        }
        tried.push(key);

        lanes[lane] = remaining - item;
        let placed = place(items, index + 1, lanes, slack, failed);
        lanes[lane] = remaining;

        if placed {
            return true;
        }
    }

    failed.insert(state);
    false
}
