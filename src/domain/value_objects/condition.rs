//! # Vehicle Condition
//!
//! Enumerated condition of a vehicle record.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::domain::value_objects::Condition;
//!
//! let used = Condition::Used;
//! assert!(used.is_used());
//! assert_eq!(used.to_string(), "USED");
//! assert_eq!("NEW".parse::<Condition>().unwrap(), Condition::New);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Condition {
    /// Factory-new vehicle.
    New = 0,
    /// Previously owned vehicle.
    Used = 1,
}

impl Condition {
    /// Returns true if the vehicle is new.
    #[inline]
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    /// Returns true if the vehicle is used.
    #[inline]
    #[must_use]
    pub const fn is_used(self) -> bool {
        matches!(self, Self::Used)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Used => write!(f, "USED"),
        }
    }
}

impl FromStr for Condition {
    type Err = InvalidConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(Self::New),
            "USED" => Ok(Self::Used),
            _ => Err(InvalidConditionError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized condition value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidConditionError(pub String);

impl fmt::Display for InvalidConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid vehicle condition: {}", self.0)
    }
}

impl std::error::Error for InvalidConditionError {}
