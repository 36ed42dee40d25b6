//! Cheapest per-location storage search.
//!
//! Given a catalog of listings and a request for vehicles, the engine finds,
//! for every location, the cheapest set of listings at that location which
//! together house all requested vehicles. The search proceeds in stages:
//!
//! 1. **Expansion**: request line items become one length per vehicle
//!    ([`vehicles`]); negative quantities are rejected up front.
//! 2. **Partitioning**: every way of splitting the vehicles into groups is
//!    enumerated once per call ([`partition`]); partitions that only permute
//!    equal lengths are collapsed.
//! 3. **Feasibility**: a group fits a listing if its vehicles can be packed
//!    into the listing's lanes under a single orientation ([`feasibility`],
//!    [`packing`]). Answers are cached for the lifetime of the engine.
//! 4. **Assignment**: each group gets its own listing at minimum total price
//!    by branch and bound ([`assignment`]).
//! 5. **Aggregation**: the cheapest assignment over all partitions is kept
//!    per location, and locations are reported cheapest first.
//!
//! # Ties
//!
//! Listings are tried in `(price, id)` order and partitions in generation
//! order; the first assignment reaching the minimum wins. Locations with the
//! same total are reported in ascending location id.
//!
//! # Scaling
//!
//! Partition count grows with the Bell number of the vehicle count and both
//! inner searches are exponential in the worst case. The engine runs every
//! search to completion; bound the input with
//! [`SearchConfig::max_vehicles`] when latency matters.

mod assignment;
mod config;
mod error;
mod feasibility;
mod key;
mod location;
mod packing;
mod partition;
mod stats;
mod vehicles;


use std::collections::HashSet;

use qtty::Unit;
use tracing::{debug, trace};

use crate::model::{Listing, SearchResult, VehicleRequest};

pub use assignment::{cheapest_assignment, Assignment};
pub use config::{SearchConfig, DEFAULT_VEHICLE_WIDTH};
pub use error::{CatalogError, ValidationError};
pub use feasibility::{FeasibilityOracle, Orientation};
pub use key::LengthKey;
pub use location::LocationIndex;
pub use packing::can_pack;
pub use partition::{distinct_partitions, Group, Partition, SetPartitions};
pub use stats::SearchStats;
pub use vehicles::{expand_requests, MAX_EXPANDED_VEHICLES};

/// Storage search engine over a fixed listing catalog.
///
/// The location index and the feasibility cache are built and owned by the
/// engine and reused by every [`find`](Self::find). Searching needs
/// `&mut self` because it fills the cache; callers sharing one engine across
/// threads must serialize access (e.g. behind a `Mutex`) or use one engine
/// each.
///
/// # Example
///
/// ```rust
/// use lotfit::model::{Listing, VehicleRequest};
/// use lotfit::search::VehicleSearch;
/// use qtty::Meter;
///
/// let mut search = VehicleSearch::<Meter>::new(vec![
///     Listing::from_f64("a1", "A", 20.0, 10.0, 100),
///     Listing::from_f64("a2", "A", 20.0, 10.0, 110),
///     Listing::from_f64("b1", "B", 50.0, 10.0, 150),
/// ]);
///
/// let results = search.find(&[VehicleRequest::from_f64(20.0, 2)]).unwrap();
/// assert_eq!(results[0].location_id, "B");
/// assert_eq!(results[0].listing_ids, vec!["b1".to_string()]);
/// assert_eq!(results[1].total_price_in_cents, 210);
/// ```
#[derive(Debug, Clone)]
pub struct VehicleSearch<L: Unit> {
    index: LocationIndex<L>,
    oracle: FeasibilityOracle,
    config: SearchConfig<L>,
}

impl<L: Unit> VehicleSearch<L> {
    /// Creates an engine with the default configuration.
    ///
    /// The catalog is trusted as given; see [`try_new`](Self::try_new) for a
    /// validating constructor.
    pub fn new(listings: impl IntoIterator<Item = Listing<L>>) -> Self {
        Self::with_config(listings, SearchConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// `config.vehicle_width` must be positive.
    pub fn with_config(
        listings: impl IntoIterator<Item = Listing<L>>,
        config: SearchConfig<L>,
    ) -> Self {
        debug_assert!(config.vehicle_width.value() > 0.0);
        Self {
            index: LocationIndex::new(listings),
            oracle: FeasibilityOracle::new(config.vehicle_width.value()),
            config,
        }
    }

    /// Creates an engine after checking listing ids are unique and every
    /// footprint is finite and positive.
    pub fn try_new(listings: Vec<Listing<L>>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !ids.insert(listing.id()) {
                return Err(CatalogError::DuplicateListing(listing.id().to_string()));
            }
            if !listing.has_valid_dimensions() {
                let (length, width) = listing.footprint();
                return Err(CatalogError::InvalidDimensions {
                    id: listing.id().to_string(),
                    length,
                    width,
                });
            }
        }
        Ok(Self::new(listings))
    }

    pub fn config(&self) -> &SearchConfig<L> {
        &self.config
    }

    pub fn index(&self) -> &LocationIndex<L> {
        &self.index
    }

    pub fn listing_count(&self) -> usize {
        self.index.listing_count()
    }

    pub fn location_count(&self) -> usize {
        self.index.location_count()
    }

    /// Number of memoized feasibility answers.
    pub fn cache_len(&self) -> usize {
        self.oracle.cache_len()
    }

    pub fn clear_cache(&mut self) {
        self.oracle.clear();
    }

    /// Finds the cheapest listing combination per location.
    ///
    /// Results are sorted ascending by total price, one per location that can
    /// house every requested vehicle. An empty request (or one made only of
    /// zero quantities) yields no results.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a negative quantity anywhere in the
    /// request, before any search work is done.
    pub fn find(
        &mut self,
        requests: &[VehicleRequest<L>],
    ) -> Result<Vec<SearchResult>, ValidationError> {
        self.find_with_stats(requests).map(|(results, _)| results)
    }

    /// Same as [`find`](Self::find), also reporting search counters.
    #[tracing::instrument(level = "debug", skip_all, fields(requests = requests.len()))]
    pub fn find_with_stats(
        &mut self,
        requests: &[VehicleRequest<L>],
    ) -> Result<(Vec<SearchResult>, SearchStats), ValidationError> {
        let vehicles = expand_requests(requests, self.config.max_vehicles)?;
        let mut stats = SearchStats {
            vehicles: vehicles.len(),
            ..SearchStats::default()
        };
        if vehicles.is_empty() {
            debug!("No vehicles requested");
            return Ok((Vec::new(), stats));
        }

        let hits_before = self.oracle.hits();
        let misses_before = self.oracle.misses();

        let (partitions, walked) = distinct_partitions(&vehicles);
        stats.partitions = walked;
        stats.distinct_partitions = partitions.len();

        let mut results = Vec::new();
        for (location_id, listings) in self.index.iter() {
            stats.locations += 1;
            match best_for_location(&partitions, listings, &mut self.oracle) {
                Some(best) => {
                    trace!(location = location_id, price = best.price, "Location matched");
                    let listing_ids = best
                        .listings
                        .iter()
                        .map(|&i| listings[i].id().to_string())
                        .collect();
                    results.push(SearchResult::new(location_id, listing_ids, best.price));
                }
                None => trace!(location = location_id, "No feasible combination"),
            }
        }
        results.sort_by_key(|result| result.total_price_in_cents);

        stats.matched_locations = results.len();
        stats.cache_hits = self.oracle.hits() - hits_before;
        stats.cache_misses = self.oracle.misses() - misses_before;
        debug!(
            vehicles = stats.vehicles,
            partitions = stats.partitions,
            distinct_partitions = stats.distinct_partitions,
            matched = stats.matched_locations,
            cache_hits = stats.cache_hits,
            cache_misses = stats.cache_misses,
            "Search finished"
        );

        Ok((results, stats))
    }
}

/// Cheapest assignment over all partitions for one location's listings.
fn best_for_location<L: Unit>(
    partitions: &[Partition],
    listings: &[Listing<L>],
    oracle: &mut FeasibilityOracle,
) -> Option<Assignment> {
    let mut best: Option<Assignment> = None;
    for partition in partitions {
        // Every group needs a listing of its own.
        if partition.len() > listings.len() {
            continue;
        }
        let bound = best.as_ref().map(|best| best.price);
        if let Some(found) = cheapest_assignment(partition, listings, oracle, bound) {
            best = Some(found);
        }
    }
    best
}
