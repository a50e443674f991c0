//! # In-Memory Vehicle Repository
//!
//! In-memory implementation of [`VehicleRepository`].
//!
//! Uses a thread-safe `HashMap` behind an async `RwLock` plus an atomic
//! sequence for identifier assignment. Suitable for tests and for
//! running the service without a database backend.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::traits::{RepositoryResult, VehicleRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of [`VehicleRepository`].
///
/// Identifiers are assigned from a monotonically increasing sequence
/// starting at 1; an identifier is never reused, even after deletion.
#[derive(Debug, Clone)]
pub struct InMemoryVehicleRepository {
    storage: Arc<RwLock<HashMap<VehicleId, Vehicle>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryVehicleRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the number of records in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all records from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    fn next_id(&self) -> VehicleId {
        VehicleId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryVehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn save(&self, vehicle: Vehicle) -> RepositoryResult<Vehicle> {
        let persisted = match vehicle.id() {
            Some(_) => vehicle,
            None => vehicle.with_id(self.next_id()),
        };
        let mut storage = self.storage.write().await;
        if let Some(id) = persisted.id() {
            storage.insert(id, persisted.clone());
        }
        Ok(persisted)
    }

    async fn delete(&self, id: VehicleId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
