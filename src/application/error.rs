//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── NotFound            - Record identifier does not exist in the store
//! ├── Validation(String)  - Malformed input record
//! ├── Lookup(LookupError) - Enrichment collaborator failure
//! ├── Repository(RepositoryError) - Storage backend failure
//! └── Internal(String)    - Invariant violation
//! ```
//!
//! The core swallows and retries nothing: every failure surfaces to the
//! immediate caller, and the presentation adapter translates it into a
//! status code.
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("vehicle", "7");
//! assert!(err.is_not_found());
//!
//! let err = ApplicationError::validation("latitude out of range");
//! assert!(err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::lookups::error::LookupError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: &'static str,
        /// Resource identifier.
        id: String,
    },

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Enrichment lookup failure from an external collaborator.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Storage backend failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an enrichment lookup failure.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }

    /// Returns true if retrying the operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Lookup(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        Self::Validation(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
