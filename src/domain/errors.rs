//! # Domain Errors
//!
//! Validation-level failures raised before a record reaches the core.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_coordinates("latitude out of range: 91");
//! assert!(err.to_string().contains("latitude"));
//! ```

use thiserror::Error;

/// Validation error for domain values.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Coordinates are outside the valid ranges.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Details are structurally invalid.
    #[error("invalid details: {0}")]
    InvalidDetails(String),
}

impl DomainError {
    /// Creates an invalid coordinates error.
    #[must_use]
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates(message.into())
    }

    /// Creates an invalid details error.
    #[must_use]
    pub fn invalid_details(message: impl Into<String>) -> Self {
        Self::InvalidDetails(message.into())
    }
}

/// Result type for domain validation.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert!(
            DomainError::invalid_coordinates("latitude out of range")
                .to_string()
                .contains("coordinates")
        );
        assert!(
            DomainError::invalid_details("model must not be empty")
                .to_string()
                .contains("details")
        );
    }
}
