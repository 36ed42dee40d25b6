//! Engine configuration.

use qtty::{Quantity, Unit};

/// Width every vehicle occupies, in the engine's length unit.
pub const DEFAULT_VEHICLE_WIDTH: f64 = 10.0;

/// Configuration for a [`VehicleSearch`](super::VehicleSearch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig<L: Unit> {
    /// Width of a single vehicle, which is also the width of a lane.
    pub vehicle_width: Quantity<L>,
    /// Upper bound on the expanded vehicle count of one request.
    ///
    /// `None` leaves the search unbounded; partition enumeration grows with
    /// the Bell number of the vehicle count.
    pub max_vehicles: Option<usize>,
}

impl<L: Unit> SearchConfig<L> {
    pub fn with_vehicle_width(mut self, width: Quantity<L>) -> Self {
        self.vehicle_width = width;
        self
    }

    pub fn with_max_vehicles(mut self, limit: usize) -> Self {
        self.max_vehicles = Some(limit);
        self
    }
}

impl<L: Unit> Default for SearchConfig<L> {
    fn default() -> Self {
        Self {
            vehicle_width: Quantity::new(DEFAULT_VEHICLE_WIDTH),
            max_vehicles: None,
        }
    }
}
