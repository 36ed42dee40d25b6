//! Domain records exchanged with the search engine.
//!
//! Lengths are carried as [`qtty::Quantity`] values in a caller-chosen length
//! unit `L`; prices are integral cents.

mod listing;
mod request;
mod result;

pub use listing::Listing;
pub use request::VehicleRequest;
pub use result::SearchResult;
