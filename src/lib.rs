//! lotfit - cheapest vehicle storage across rectangular listings
//!
//! Matches a request for vehicles of given lengths against a catalog of
//! priced storage listings and reports, per location, the cheapest set of
//! listings that physically houses every vehicle.

pub mod model;
pub mod search;

pub use model::{Listing, SearchResult, VehicleRequest};
pub use search::{SearchConfig, ValidationError, VehicleSearch};

/// Identifier type used for listings and locations.
pub type Id = String;
