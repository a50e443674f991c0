//! # Vehicle Entity
//!
//! The vehicle record aggregate.
//!
//! A vehicle carries a store-assigned identity, a condition, wholesale
//! descriptive details, a location, and a transient price. The price and
//! the location's resolved address are derived data: read paths populate
//! them from live lookups and persisted values are never served.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::domain::entities::Vehicle;
//! use vehicle_registry::domain::value_objects::{Condition, Details, Location, Manufacturer};
//!
//! let vehicle = Vehicle::new(
//!     Condition::Used,
//!     Details::builder("Impala", Manufacturer::new(101, "Chevrolet")).build(),
//!     Location::new(40.73061, -73.935242),
//! );
//!
//! assert!(vehicle.is_new_record());
//! assert!(vehicle.price().is_none());
//! ```

use crate::domain::value_objects::{Condition, Details, Location, VehicleId};
use serde::{Deserialize, Serialize};

/// A vehicle record.
///
/// The identifier is `None` until the store assigns one on first save
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Store-assigned identifier; `None` for a record never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<VehicleId>,
    /// Vehicle condition.
    condition: Condition,
    /// Descriptive attributes, copied wholesale during merges.
    details: Details,
    /// Coordinates plus transient resolved address.
    location: Location,
    /// Transient display price, populated only at read time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<String>,
}

impl Vehicle {
    /// Creates an unpersisted vehicle record.
    #[must_use]
    pub fn new(condition: Condition, details: Details, location: Location) -> Self {
        Self {
            id: None,
            condition,
            details,
            location,
            price: None,
        }
    }

    /// Returns a copy of this record carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the identifier, if the record has been persisted.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> Option<VehicleId> {
        self.id
    }

    /// Returns true if the record has never been persisted.
    #[inline]
    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    /// Returns the condition.
    #[inline]
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the descriptive details.
    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the display price, if populated.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    /// Sets the condition.
    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    /// Replaces the details wholesale.
    pub fn set_details(&mut self, details: Details) {
        self.details = details;
    }

    /// Replaces the location.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Sets the display price.
    pub fn set_price(&mut self, price: Option<String>) {
        self.price = price;
    }
}
