//! Requested vehicles, one line item per vehicle length.

use qtty::{Quantity, Unit};

/// A line item asking for `quantity` vehicles of the same `length`.
///
/// The quantity is signed so that malformed input survives parsing and is
/// reported by the engine as a validation error instead of being clamped.
///
/// # Example
///
/// ```rust
/// use lotfit::model::VehicleRequest;
/// use qtty::Meter;
///
/// let request = VehicleRequest::<Meter>::from_f64(20.0, 2);
/// assert_eq!(request.length().value(), 20.0);
/// assert_eq!(request.quantity(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleRequest<L: Unit> {
    length: Quantity<L>,
    quantity: i64,
}

impl<L: Unit> VehicleRequest<L> {
    pub const fn new(length: Quantity<L>, quantity: i64) -> Self {
        Self { length, quantity }
    }

    pub const fn from_f64(length: f64, quantity: i64) -> Self {
        Self::new(Quantity::<L>::new(length), quantity)
    }

    pub const fn length(&self) -> Quantity<L> {
        self.length
    }

    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Converts the requested length to another unit of the same dimension.
    pub fn to<T: Unit<Dim = L::Dim>>(self) -> VehicleRequest<T> {
        VehicleRequest::new(self.length.to(), self.quantity)
    }
}

// =============================================================================
// VehicleRequest Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<L: Unit> serde::Serialize for VehicleRequest<L> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("VehicleRequest", 2)?;
        s.serialize_field("length", &self.length.value())?;
        s.serialize_field("quantity", &self.quantity)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, L: Unit> serde::Deserialize<'de> for VehicleRequest<L> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            length: f64,
            quantity: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_f64(raw.length, raw.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Meter;

    #[test]
    fn test_request_accessors() {
        let request = VehicleRequest::new(Quantity::<Meter>::new(30.0), 3);
        assert_eq!(request.length().value(), 30.0);
        assert_eq!(request.quantity(), 3);
    }

    #[test]
    fn test_negative_quantity_is_representable() {
        let request = VehicleRequest::<Meter>::from_f64(30.0, -1);
        assert_eq!(request.quantity(), -1);
    }

    #[test]
    fn test_request_same_unit_conversion_is_identity() {
        let request = VehicleRequest::<Meter>::from_f64(20.0, 4);
        let converted: VehicleRequest<Meter> = request.to();
        assert_eq!(converted, request);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_json_shape() {
        let requests: Vec<VehicleRequest<Meter>> =
            serde_json::from_str(r#"[{"length": 20, "quantity": 2}, {"length": 35.5, "quantity": 0}]"#)
                .unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], VehicleRequest::from_f64(20.0, 2));
        assert_eq!(requests[1], VehicleRequest::from_f64(35.5, 0));

        let json = serde_json::to_string(&requests[0]).unwrap();
        assert_eq!(json, r#"{"length":20.0,"quantity":2}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_json_keeps_negative_quantity_for_validation() {
        let request: VehicleRequest<Meter> =
            serde_json::from_str(r#"{"length": 20, "quantity": -3}"#).unwrap();
        assert_eq!(request.quantity(), -3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_json_rejects_malformed_fields() {
        let result: Result<VehicleRequest<Meter>, _> =
            serde_json::from_str(r#"{"length": "long", "quantity": 1}"#);
        assert!(result.is_err());

        let result: Result<VehicleRequest<Meter>, _> = serde_json::from_str(r#"{"length": 20}"#);
        assert!(result.is_err());

        let result: Result<Vec<VehicleRequest<Meter>>, _> =
            serde_json::from_str(r#"{"length": 20, "quantity": 1}"#);
        assert!(result.is_err());
    }
}
