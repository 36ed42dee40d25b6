//! Expansion of request line items into the vehicle multiset.

use qtty::Unit;

use super::error::ValidationError;
use crate::model::VehicleRequest;

/// Largest vehicle multiset a `Vec<f64>` can address.
pub const MAX_EXPANDED_VEHICLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Flattens line items into one length per vehicle.
///
/// Checks run in a fixed order over the whole request: negative quantities
/// first, then lengths of the entries that contribute vehicles, then the
/// optional vehicle limit. Requests too large to allocate fail with
/// [`ValidationError::TooManyVehicles`] even without a limit. Entries with
/// quantity 0 are dropped.
pub fn expand_requests<L: Unit>(
    requests: &[VehicleRequest<L>],
    max_vehicles: Option<usize>,
) -> Result<Vec<f64>, ValidationError> {
    if let Some((index, request)) = requests
        .iter()
        .enumerate()
        .find(|(_, request)| request.quantity() < 0)
    {
        return Err(ValidationError::NegativeQuantity {
            index,
            quantity: request.quantity(),
        });
    }

    let mut requested: u64 = 0;
    for (index, request) in requests.iter().enumerate() {
        if request.quantity() == 0 {
            continue;
        }
        let length = request.length().value();
        if !length.is_finite() || length <= 0.0 {
            return Err(ValidationError::InvalidLength { index, length });
        }
        requested = requested.saturating_add(request.quantity() as u64);
    }

    if let Some(limit) = max_vehicles {
        if requested > limit as u64 {
            return Err(ValidationError::TooManyVehicles { requested, limit });
        }
    }

    let too_many = ValidationError::TooManyVehicles {
        requested,
        limit: MAX_EXPANDED_VEHICLES,
    };
    let capacity = usize::try_from(requested).map_err(|_| too_many.clone())?;
    if capacity > MAX_EXPANDED_VEHICLES {
        return Err(too_many);
    }
    let mut vehicles: Vec<f64> = Vec::new();
    vehicles.try_reserve_exact(capacity).map_err(|_| too_many)?;
    for request in requests {
        let length = request.length().value();
        vehicles.extend(std::iter::repeat(length).take(request.quantity() as usize));
    }
    Ok(vehicles)
}
