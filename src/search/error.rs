use crate::Id;
use thiserror::Error;

/// Caller-correctable problems with a search request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Vehicle quantity cannot be negative: request {index} has quantity {quantity}")]
    NegativeQuantity { index: usize, quantity: i64 },

    #[error("Vehicle length must be finite and positive: request {index} has length {length}")]
    InvalidLength { index: usize, length: f64 },

    #[error("Request expands to {requested} vehicles, limit is {limit}")]
    TooManyVehicles { requested: u64, limit: usize },
}

/// Problems with a listing catalog, reported by [`VehicleSearch::try_new`](super::VehicleSearch::try_new).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Listing ID already exists: {0}")]
    DuplicateListing(Id),

    #[error("Listing {id} has invalid dimensions {length} x {width}")]
    InvalidDimensions { id: Id, length: f64, width: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_display() {
        let e = ValidationError::NegativeQuantity {
            index: 1,
            quantity: -2,
        };
        assert_eq!(
            e.to_string(),
            "Vehicle quantity cannot be negative: request 1 has quantity -2"
        );
    }

    #[test]
    fn too_many_vehicles_display() {
        let e = ValidationError::TooManyVehicles {
            requested: 40,
            limit: 12,
        };
        assert_eq!(e.to_string(), "Request expands to 40 vehicles, limit is 12");
    }

    #[test]
    fn duplicate_listing_display() {
        let e = CatalogError::DuplicateListing("a1".to_string());
        assert_eq!(e.to_string(), "Listing ID already exists: a1");
    }

    #[test]
    fn invalid_dimensions_display() {
        let e = CatalogError::InvalidDimensions {
            id: "x".to_string(),
            length: 0.0,
            width: 10.0,
        };
        assert!(e.to_string().contains("invalid dimensions"));
    }
}
