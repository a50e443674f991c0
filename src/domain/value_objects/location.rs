//! # Vehicle Location
//!
//! Coordinate pair with an optional resolved address.
//!
//! The coordinates are part of a record's durable state. The address is
//! transient: it is resolved by the address lookup on every read path
//! and is never trusted from persisted storage.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::domain::value_objects::Location;
//!
//! let location = Location::new(40.73061, -73.935242);
//! assert!(!location.has_address());
//!
//! let resolved = location.with_address("1071 5th Ave, Manhattan, NY");
//! assert_eq!(resolved.address(), Some("1071 5th Ave, Manhattan, NY"));
//! ```

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate pair plus an optional resolved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    lat: f64,
    /// Longitude in degrees.
    lon: f64,
    /// Resolved street address, populated only at read time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Location {
    /// Creates a location from a coordinate pair, with no address.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
        }
    }

    /// Returns the latitude.
    #[inline]
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude.
    #[inline]
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns the resolved address, if present.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns true if an address has been resolved.
    #[inline]
    #[must_use]
    pub const fn has_address(&self) -> bool {
        self.address.is_some()
    }

    /// Returns a copy of this location with the address populated.
    #[must_use]
    pub fn with_address(&self, address: impl Into<String>) -> Self {
        Self {
            lat: self.lat,
            lon: self.lon,
            address: Some(address.into()),
        }
    }

    /// Returns a copy of this location with the address cleared.
    #[must_use]
    pub fn without_address(&self) -> Self {
        Self::new(self.lat, self.lon)
    }

    /// Validates the coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinates`] when the latitude is
    /// outside [-90, 90] or the longitude outside [-180, 180].
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::invalid_coordinates(format!(
                "latitude out of range: {}",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(DomainError::invalid_coordinates(format!(
                "longitude out of range: {}",
                self.lon
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => write!(f, "({}, {}) {}", self.lat, self.lon, address),
            None => write!(f, "({}, {})", self.lat, self.lon),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_address() {
        let location = Location::new(40.73061, -73.935242);
        assert!(!location.has_address());
        assert_eq!(location.lat(), 40.73061);
        assert_eq!(location.lon(), -73.935242);
    }

    #[test]
    fn with_address_preserves_coordinates() {
        let location = Location::new(40.73061, -73.935242);
        let resolved = location.with_address("1071 5th Ave, Manhattan, NY");
        assert_eq!(resolved.lat(), location.lat());
        assert_eq!(resolved.lon(), location.lon());
        assert_eq!(resolved.address(), Some("1071 5th Ave, Manhattan, NY"));
    }

    #[test]
    fn without_address_clears() {
        let resolved = Location::new(1.0, 2.0).with_address("somewhere");
        assert!(!resolved.without_address().has_address());
    }

    #[test]
    fn validate_ok() {
        assert!(Location::new(40.73061, -73.935242).validate().is_ok());
        assert!(Location::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(Location::new(91.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, -180.5).validate().is_err());
        assert!(Location::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn serde_skips_missing_address() {
        let json = serde_json::to_value(Location::new(1.5, 2.5)).unwrap();
        assert!(json.get("address").is_none());

        let back: Location = serde_json::from_str(r#"{"lat":1.5,"lon":2.5}"#).unwrap();
        assert!(!back.has_address());
    }
}
