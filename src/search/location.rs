//! Listings grouped by location.

use std::collections::BTreeMap;

use qtty::Unit;

use crate::model::Listing;
use crate::Id;

/// Listings bucketed by location id.
///
/// Each bucket is sorted ascending by `(price, id)`, the order in which the
/// assignment search tries listings. Locations iterate in ascending id.
#[derive(Debug, Clone)]
pub struct LocationIndex<L: Unit> {
    locations: BTreeMap<Id, Vec<Listing<L>>>,
}

impl<L: Unit> LocationIndex<L> {
    pub fn new(listings: impl IntoIterator<Item = Listing<L>>) -> Self {
        let mut locations: BTreeMap<Id, Vec<Listing<L>>> = BTreeMap::new();
        for listing in listings {
            locations
                .entry(listing.location_id().to_string())
                .or_default()
                .push(listing);
        }
        for bucket in locations.values_mut() {
            bucket.sort_by(|a, b| {
                a.price_in_cents()
                    .cmp(&b.price_in_cents())
                    .then_with(|| a.id().cmp(b.id()))
            });
        }
        Self { locations }
    }

    /// Listings at `location_id`, cheapest first.
    pub fn listings(&self, location_id: &str) -> Option<&[Listing<L>]> {
        self.locations.get(location_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Listing<L>])> {
        self.locations
            .iter()
            .map(|(id, listings)| (id.as_str(), listings.as_slice()))
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn listing_count(&self) -> usize {
        self.locations.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
