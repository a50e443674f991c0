//! # Vehicle Identifier
//!
//! Numeric identity type for vehicle records.
//!
//! Identifiers are assigned by the record store on first save and are
//! immutable afterwards. A record that has never been persisted carries
//! no identifier at all (`Option<VehicleId>` on the entity).
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::domain::value_objects::VehicleId;
//!
//! let id = VehicleId::new(4);
//! assert_eq!(id.as_u64(), 4);
//! assert_eq!(id.to_string(), "4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned numeric identifier for a vehicle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    /// Creates an identifier from a raw numeric value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<VehicleId> for u64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_as_u64() {
        let id = VehicleId::new(42);
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId::new(7).to_string(), "7");
    }

    #[test]
    fn conversions() {
        let id: VehicleId = 9u64.into();
        let raw: u64 = id.into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId::new(1) < VehicleId::new(2));
    }
}
