//! # Vehicle Service
//!
//! Orchestrates persisted records and external enrichment.
//!
//! This is the single point where stored vehicle data meets the two
//! lookup collaborators. Read paths always re-fetch price and address;
//! nothing derived is ever served from storage. Write paths own the
//! create/update merge rules and deletion.
//!
//! # Enrichment
//!
//! For each record, the price is fetched by identifier first, then the
//! address is resolved from the record's coordinates. `list` runs the
//! per-record enrichments concurrently and joins them before returning;
//! one failure fails the whole call, never a partial list.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::lookups::traits::{AddressLookup, PriceLookup};
use crate::infrastructure::persistence::traits::VehicleRepository;
use futures::future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Resource name used in not-found errors.
const RESOURCE: &str = "vehicle";

/// Create, read, update and delete vehicle records, gathering related
/// price and location data on reads.
#[derive(Debug)]
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
    prices: Arc<dyn PriceLookup>,
    addresses: Arc<dyn AddressLookup>,
    /// Serializes read-modify-write sequences on the store, making
    /// concurrent updates to one identifier last-writer-wins.
    write_lock: Mutex<()>,
}

impl VehicleService {
    /// Creates a service over the given store and lookup collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        prices: Arc<dyn PriceLookup>,
        addresses: Arc<dyn AddressLookup>,
    ) -> Self {
        Self {
            repository,
            prices,
            addresses,
            write_lock: Mutex::new(()),
        }
    }

    /// Gathers all vehicles, each enriched with live price and address.
    ///
    /// Per-record enrichments run concurrently; all results are
    /// collected before returning. Order follows the store.
    ///
    /// # Errors
    ///
    /// Fails with the first enrichment or repository error; no partial
    /// results are returned.
    pub async fn list(&self) -> ApplicationResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        tracing::debug!(count = vehicles.len(), "enriching vehicle list");

        future::try_join_all(vehicles.into_iter().map(|vehicle| self.enrich(vehicle))).await
    }

    /// Gets a vehicle by identifier, enriched with live price and address.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when the identifier does
    /// not exist, or the enrichment error when a lookup fails.
    pub async fn find_by_id(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(RESOURCE, id.to_string()))?;

        self.enrich(vehicle).await
    }

    /// Either creates or updates a vehicle, based on prior existence.
    ///
    /// With an identifier, the stored record's details, location,
    /// condition and price are replaced wholesale by the incoming
    /// values; the identifier itself never changes. Without one, the
    /// record is persisted as new and the store assigns the identifier.
    /// No enrichment happens on either path.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when an identifier is
    /// given but no such record exists; no record is created in that
    /// case.
    pub async fn save(&self, vehicle: Vehicle) -> ApplicationResult<Vehicle> {
        match vehicle.id() {
            Some(id) => {
                let _guard = self.write_lock.lock().await;
                let mut stored = self
                    .repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found(RESOURCE, id.to_string()))?;

                stored.set_details(vehicle.details().clone());
                stored.set_location(vehicle.location().clone());
                stored.set_condition(vehicle.condition());
                stored.set_price(vehicle.price().map(str::to_string));

                let updated = self.repository.save(stored).await?;
                tracing::info!(id = %id, "vehicle updated");
                Ok(updated)
            }
            None => {
                let created = self.repository.save(vehicle).await?;
                tracing::info!(id = ?created.id(), "vehicle created");
                Ok(created)
            }
        }
    }

    /// Deletes a vehicle by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when the identifier does
    /// not exist; the store is left untouched.
    pub async fn delete(&self, id: VehicleId) -> ApplicationResult<()> {
        let _guard = self.write_lock.lock().await;
        let removed = self.repository.delete(id).await?;
        if !removed {
            return Err(ApplicationError::not_found(RESOURCE, id.to_string()));
        }
        tracing::info!(id = %id, "vehicle deleted");
        Ok(())
    }

    /// Writes live price and resolved address onto the record, price
    /// first, then address.
    async fn enrich(&self, mut vehicle: Vehicle) -> ApplicationResult<Vehicle> {
        let id = vehicle
            .id()
            .ok_or_else(|| ApplicationError::internal("stored record carries no identifier"))?;

        let price = self.prices.price_for(id).await?;
        vehicle.set_price(Some(price));

        let resolved = self.addresses.resolve(vehicle.location()).await?;
        vehicle.set_location(resolved);

        Ok(vehicle)
    }
}
