use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cheapest combination of listings found at one location.
///
/// `listing_ids` is sorted ascending and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub location_id: Id,
    pub listing_ids: Vec<Id>,
    pub total_price_in_cents: u64,
}

impl SearchResult {
    /// Builds a result, sorting and deduplicating the listing ids.
    pub fn new(location_id: impl Into<Id>, mut listing_ids: Vec<Id>, total_price_in_cents: u64) -> Self {
        listing_ids.sort();
        listing_ids.dedup();
        Self {
            location_id: location_id.into(),
            listing_ids,
            total_price_in_cents,
        }
    }
}
