//! Rectangular storage listings offered at a location.

use crate::Id;
use qtty::{Quantity, Unit};

/// A rectangular storage space with a price, offered at one location.
///
/// Listings are immutable once handed to a [`VehicleSearch`](crate::search::VehicleSearch).
///
/// # Example
///
/// ```rust
/// use lotfit::model::Listing;
/// use qtty::Meter;
///
/// let listing = Listing::<Meter>::from_f64("a1", "A", 20.0, 10.0, 100);
/// assert_eq!(listing.id(), "a1");
/// assert_eq!(listing.location_id(), "A");
/// assert_eq!(listing.footprint(), (20.0, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<L: Unit> {
    id: Id,
    location_id: Id,
    length: Quantity<L>,
    width: Quantity<L>,
    price_in_cents: u64,
}

impl<L: Unit> Listing<L> {
    pub fn new(
        id: impl Into<Id>,
        location_id: impl Into<Id>,
        length: Quantity<L>,
        width: Quantity<L>,
        price_in_cents: u64,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            length,
            width,
            price_in_cents,
        }
    }

    pub fn from_f64(
        id: impl Into<Id>,
        location_id: impl Into<Id>,
        length: f64,
        width: f64,
        price_in_cents: u64,
    ) -> Self {
        Self::new(
            id,
            location_id,
            Quantity::new(length),
            Quantity::new(width),
            price_in_cents,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn length(&self) -> Quantity<L> {
        self.length
    }

    pub fn width(&self) -> Quantity<L> {
        self.width
    }

    pub fn price_in_cents(&self) -> u64 {
        self.price_in_cents
    }

    /// Raw `(length, width)` values in unit `L`.
    pub fn footprint(&self) -> (f64, f64) {
        (self.length.value(), self.width.value())
    }

    /// Returns true if both dimensions are finite and strictly positive.
    pub fn has_valid_dimensions(&self) -> bool {
        let (length, width) = self.footprint();
        length.is_finite() && width.is_finite() && length > 0.0 && width > 0.0
    }

    /// Converts the listing dimensions to another unit of the same dimension.
    pub fn to<T: Unit<Dim = L::Dim>>(self) -> Listing<T> {
        Listing {
            id: self.id,
            location_id: self.location_id,
            length: self.length.to(),
            width: self.width.to(),
            price_in_cents: self.price_in_cents,
        }
    }
}

// =============================================================================
// Listing Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<L: Unit> serde::Serialize for Listing<L> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Listing", 5)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("location_id", &self.location_id)?;
        s.serialize_field("length", &self.length.value())?;
        s.serialize_field("width", &self.width.value())?;
        s.serialize_field("price_in_cents", &self.price_in_cents)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, L: Unit> serde::Deserialize<'de> for Listing<L> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            id: String,
            location_id: String,
            length: f64,
            width: f64,
            price_in_cents: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_f64(
            raw.id,
            raw.location_id,
            raw.length,
            raw.width,
            raw.price_in_cents,
        ))
    }
}
