//! # Repository Traits
//!
//! Port definition for vehicle record persistence.
//!
//! The trait abstracts a keyed store with store-assigned identifiers.
//! Implementations can use different backends; the in-memory
//! implementation in [`in_memory`](super::in_memory) is the default.
//!
//! # Examples
//!
//! ```ignore
//! use vehicle_registry::infrastructure::persistence::traits::VehicleRepository;
//!
//! async fn count_records(repo: &impl VehicleRepository) {
//!     let count = repo.count().await.unwrap();
//!     println!("{count} records stored");
//! }
//! ```

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for vehicle records.
///
/// A keyed store with create/read/update/delete and store-assigned
/// identifiers. Existence checks go through [`find_by_id`] returning
/// `None`.
///
/// [`find_by_id`]: VehicleRepository::find_by_id
#[async_trait]
pub trait VehicleRepository: Send + Sync + fmt::Debug {
    /// Returns all stored records.
    ///
    /// Order follows the store's iteration order and is not guaranteed
    /// stable across calls.
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Gets a record by identifier.
    ///
    /// Returns `None` if no record with that identifier exists.
    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>>;

    /// Saves a record.
    ///
    /// Assigns a fresh identifier when the record carries none,
    /// otherwise overwrites the row with the same identifier. Returns
    /// the persisted record, identifier included.
    async fn save(&self, vehicle: Vehicle) -> RepositoryResult<Vehicle>;

    /// Deletes a record by identifier.
    ///
    /// Returns `Ok(true)` if the record was deleted, `Ok(false)` if it
    /// didn't exist.
    async fn delete(&self, id: VehicleId) -> RepositoryResult<bool>;

    /// Counts all stored records.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error() {
        let err = RepositoryError::connection("refused");
        assert!(err.to_string().contains("connection"));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn serialization_error() {
        let err = RepositoryError::serialization("bad row");
        assert!(err.to_string().contains("serialization"));
    }

    #[test]
    fn internal_error() {
        let err = RepositoryError::internal("unexpected state");
        assert!(err.to_string().contains("internal"));
    }
}
