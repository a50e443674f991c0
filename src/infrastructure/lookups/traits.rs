//! # Lookup Traits
//!
//! Port definitions for the two external enrichment collaborators.
//!
//! The enrichment service depends on these traits only; the HTTP
//! implementations live in [`pricing`](super::pricing) and
//! [`maps`](super::maps), and tests substitute in-process fakes.
//!
//! # Examples
//!
//! ```ignore
//! use vehicle_registry::infrastructure::lookups::traits::PriceLookup;
//! use vehicle_registry::domain::value_objects::VehicleId;
//!
//! async fn show_price(prices: &impl PriceLookup) {
//!     let price = prices.price_for(VehicleId::new(4)).await.unwrap();
//!     println!("{price}");
//! }
//! ```

use crate::domain::value_objects::{Location, VehicleId};
use crate::infrastructure::lookups::error::LookupResult;
use async_trait::async_trait;
use std::fmt;

/// External collaborator returning a display price for a record.
#[async_trait]
pub trait PriceLookup: Send + Sync + fmt::Debug {
    /// Fetches the display price for the given record identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`](super::error::LookupError) on transport
    /// or protocol failure; the caller's enriching operation aborts.
    async fn price_for(&self, id: VehicleId) -> LookupResult<String>;
}

/// External collaborator resolving coordinates into an address.
#[async_trait]
pub trait AddressLookup: Send + Sync + fmt::Debug {
    /// Resolves the location's coordinates, returning the same
    /// coordinates with the address populated.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`](super::error::LookupError) on transport
    /// or protocol failure; the caller's enriching operation aborts.
    async fn resolve(&self, location: &Location) -> LookupResult<Location>;
}
