//! Cheapest injective assignment of groups to listings.

use qtty::Unit;

use super::feasibility::FeasibilityOracle;
use super::partition::Group;
use crate::model::Listing;

/// Listings chosen for each group of a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Sum of the chosen listings' prices.
    pub price: u64,
    /// `listings[g]` indexes the listing housing group `g`.
    pub listings: Vec<usize>,
}

/// Finds the cheapest way to give every group its own feasible listing.
///
/// `listings` must be sorted ascending by price (ties in any fixed order);
/// the search relies on it to stop scanning a group's candidates early.
/// Only assignments strictly cheaper than `bound` are reported, which lets a
/// caller carry the best price across partitions.
pub fn cheapest_assignment<L: Unit>(
    groups: &[Group],
    listings: &[Listing<L>],
    oracle: &mut FeasibilityOracle,
    bound: Option<u64>,
) -> Option<Assignment> {
    let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(groups.len());
    for group in groups {
        let feasible: Vec<usize> = listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| {
                let (length, width) = listing.footprint();
                oracle.fits(group, length, width)
            })
            .map(|(index, _)| index)
            .collect();
        if feasible.is_empty() {
            return None;
        }
        candidates.push(feasible);
    }

    // floor[g]: cheapest conceivable cost of groups g.., ignoring exclusivity.
    let mut floor = vec![0u64; groups.len() + 1];
    for g in (0..groups.len()).rev() {
        let cheapest = listings[candidates[g][0]].price_in_cents();
        floor[g] = floor[g + 1].saturating_add(cheapest);
    }
    if bound.is_some_and(|limit| floor[0] >= limit) {
        return None;
    }

    let mut search = AssignmentSearch {
        candidates: &candidates,
        listings,
        floor: &floor,
        used: vec![false; listings.len()],
        chosen: Vec::with_capacity(groups.len()),
        best: None,
        bound,
    };
    search.descend(0, 0);
    search.best
}

/// Backtracking state; `used` and `chosen` are scratch buffers restored
/// after every trial.
struct AssignmentSearch<'a, L: Unit> {
    candidates: &'a [Vec<usize>],
    listings: &'a [Listing<L>],
    floor: &'a [u64],
    used: Vec<bool>,
    chosen: Vec<usize>,
    best: Option<Assignment>,
    bound: Option<u64>,
}

impl<L: Unit> AssignmentSearch<'_, L> {
    fn limit(&self) -> Option<u64> {
        self.best.as_ref().map(|best| best.price).or(self.bound)
    }

    fn descend(&mut self, group: usize, running: u64) {
        if group == self.candidates.len() {
            if self.limit().map_or(true, |limit| running < limit) {
                self.best = Some(Assignment {
                    price: running,
                    listings: self.chosen.clone(),
                });
            }
            return;
        }

        let candidates = self.candidates;
        for &listing in &candidates[group] {
            if self.used[listing] {
                continue;
            }
            let price = running.saturating_add(self.listings[listing].price_in_cents());
            if let Some(limit) = self.limit() {
                // Candidates are sorted by price, the rest cost at least as much.
                if price.saturating_add(self.floor[group + 1]) >= limit {
                    break;
                }
            }

            self.used[listing] = true;
            self.chosen.push(listing);
            self.descend(group + 1, price);
            self.chosen.pop();
            self.used[listing] = false;
        }
    }
}
